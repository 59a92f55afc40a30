//! Stake account actions

use {
    super::constants::STAKE_LEN,
    crate::{error::Result, transaction::send_and_confirm},
    log::info,
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_program::{
        instruction::Instruction,
        pubkey::Pubkey,
        stake::{
            instruction as stake_instruction,
            state::{Authorized, Lockup},
        },
    },
    solana_sdk::signature::{Signature, Signer},
};

/// Instructions creating `stake` with `authority` as staker and withdrawer.
pub fn create_stake_instructions(
    payer: &Pubkey,
    stake: &Pubkey,
    authority: &Pubkey,
    lamports: u64,
) -> Vec<Instruction> {
    stake_instruction::create_account(
        payer,
        stake,
        &Authorized::auto(authority),
        &Lockup::default(),
        lamports,
    )
}

/// Creates a stake account funded with rent exemption plus `lamports`.
pub async fn create_stake(
    client: &RpcClient,
    payer: &dyn Signer,
    stake: &dyn Signer,
    authority: &Pubkey,
    lamports: u64,
) -> Result<Signature> {
    info!("Creating stake {}", stake.pubkey());
    let rent = client
        .get_minimum_balance_for_rent_exemption(STAKE_LEN)
        .await?;
    let instructions = create_stake_instructions(
        &payer.pubkey(),
        &stake.pubkey(),
        authority,
        rent.saturating_add(lamports),
    );
    send_and_confirm(client, &instructions, payer, &[stake]).await
}

#[cfg(test)]
mod tests {
    use {super::*, crate::stake::constants::STAKE_PROGRAM_ID, solana_program::system_program};

    #[test]
    fn stake_is_created_then_initialized() {
        let payer = Pubkey::new_unique();
        let stake = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let instructions = create_stake_instructions(&payer, &stake, &authority, 42);
        assert_eq!(instructions.len(), 2);
        assert_eq!(instructions[0].program_id, system_program::id());
        assert_eq!(instructions[1].program_id, STAKE_PROGRAM_ID);
        assert_eq!(instructions[1].accounts[0].pubkey, stake);
    }
}
