//! Stake pool program addresses, limits and derived accounts

use {
    crate::stake::constants::LAMPORTS_PER_SOL,
    solana_program::{pubkey, pubkey::Pubkey},
    std::num::NonZeroU32,
};

/// Public key that identifies the SPL Stake Pool program.
pub const STAKE_POOL_PROGRAM_ID: Pubkey = pubkey!("SPoo1Ku8WFXoNDMHPsrGSTSG1Y47rzgn41SLUNakuHy");

/// Public key that identifies the token metadata program.
pub const METADATA_PROGRAM_ID: Pubkey = pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Maximum number of validators to update during UpdateValidatorListBalance.
pub const MAX_VALIDATORS_TO_UPDATE: usize = 5;

/// Number of validators a newly created validator list has room for.
pub const MAX_VALIDATORS: u32 = 2950;

/// Seed for ephemeral stake account
pub const EPHEMERAL_STAKE_SEED_PREFIX: &[u8] = b"ephemeral";

/// Seed used to derive transient stake accounts.
pub const TRANSIENT_STAKE_SEED_PREFIX: &[u8] = b"transient";

/// Minimum amount of staked lamports a validator stake account is kept at,
/// one SOL. Stricter than the program's own merge threshold.
pub const MINIMUM_ACTIVE_STAKE: u64 = LAMPORTS_PER_SOL;

/// Minimum amount of lamports kept in the reserve above rent exemption
pub const MINIMUM_RESERVE_LAMPORTS: u64 = spl_stake_pool::MINIMUM_RESERVE_LAMPORTS;

const AUTHORITY_DEPOSIT: &[u8] = b"deposit";
const AUTHORITY_WITHDRAW: &[u8] = b"withdraw";
const METADATA_PREFIX: &[u8] = b"metadata";

/// Generates the deposit authority program address for the stake pool
pub fn find_deposit_authority_program_address(
    program_id: &Pubkey,
    stake_pool_address: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[stake_pool_address.as_ref(), AUTHORITY_DEPOSIT], program_id)
}

/// Generates the withdraw authority program address for the stake pool
pub fn find_withdraw_authority_program_address(
    program_id: &Pubkey,
    stake_pool_address: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[stake_pool_address.as_ref(), AUTHORITY_WITHDRAW],
        program_id,
    )
}

/// Generates the stake program address for a validator's vote account
pub fn find_stake_program_address(
    program_id: &Pubkey,
    vote_account_address: &Pubkey,
    stake_pool_address: &Pubkey,
    seed: Option<NonZeroU32>,
) -> (Pubkey, u8) {
    let seed = seed.map(|s| s.get().to_le_bytes());
    Pubkey::find_program_address(
        &[
            vote_account_address.as_ref(),
            stake_pool_address.as_ref(),
            seed.as_ref().map(|s| s.as_slice()).unwrap_or(&[]),
        ],
        program_id,
    )
}

/// Generates the transient stake program address for a validator's vote
/// account
pub fn find_transient_stake_program_address(
    program_id: &Pubkey,
    vote_account_address: &Pubkey,
    stake_pool_address: &Pubkey,
    seed: u64,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            TRANSIENT_STAKE_SEED_PREFIX,
            vote_account_address.as_ref(),
            stake_pool_address.as_ref(),
            &seed.to_le_bytes(),
        ],
        program_id,
    )
}

/// Generates the ephemeral program address for stake pool redelegation
pub fn find_ephemeral_stake_program_address(
    program_id: &Pubkey,
    stake_pool_address: &Pubkey,
    seed: u64,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            EPHEMERAL_STAKE_SEED_PREFIX,
            stake_pool_address.as_ref(),
            &seed.to_le_bytes(),
        ],
        program_id,
    )
}

/// Generates the metadata account address holding the display name, symbol
/// and uri of `mint`
pub fn find_metadata_account(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[METADATA_PREFIX, METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &METADATA_PROGRAM_ID,
    )
}
