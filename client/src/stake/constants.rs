//! Stake program constants

use solana_program::{pubkey, pubkey::Pubkey};

/// Public key that identifies the Stake program.
pub const STAKE_PROGRAM_ID: Pubkey = pubkey!("Stake11111111111111111111111111111111111111");

/// Public key that identifies the Stake config sysvar.
pub const SYSVAR_STAKE_CONFIG_ID: Pubkey = pubkey!("StakeConfig11111111111111111111111111111111");

/// Size of stake account.
pub const STAKE_LEN: usize = 200;

/// Number of lamports per SOL
pub const LAMPORTS_PER_SOL: u64 = solana_program::native_token::LAMPORTS_PER_SOL;

/// Minimum delegation allowed by the stake program
pub const MINIMUM_DELEGATION: u64 = LAMPORTS_PER_SOL;

#[cfg(test)]
mod tests {
    use {super::*, solana_program::stake::state::StakeStateV2};

    #[test]
    fn matches_native_stake_program() {
        assert_eq!(STAKE_PROGRAM_ID, solana_program::stake::program::id());
        #[allow(deprecated)]
        let config_id = solana_program::stake::config::id();
        assert_eq!(SYSVAR_STAKE_CONFIG_ID, config_id);
        assert_eq!(STAKE_LEN, StakeStateV2::size_of());
    }

    #[test]
    fn minimum_delegation_is_one_sol() {
        assert_eq!(LAMPORTS_PER_SOL, 1_000_000_000);
        assert_eq!(MINIMUM_DELEGATION, LAMPORTS_PER_SOL);
    }
}
