//! Token mint and account actions

use {
    crate::{error::Result, transaction::send_and_confirm},
    log::info,
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_program::{
        instruction::Instruction, program_pack::Pack, pubkey::Pubkey, system_instruction,
    },
    solana_sdk::signature::{Signature, Signer},
    spl_token::{
        instruction::{initialize_account, initialize_mint},
        native_mint,
        state::{Account as TokenAccount, Mint as TokenMint},
    },
};

/// Instructions creating `mint` with no freeze authority.
pub fn create_mint_instructions(
    payer: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    rent: u64,
) -> Result<Vec<Instruction>> {
    Ok(vec![
        system_instruction::create_account(
            payer,
            mint,
            rent,
            TokenMint::LEN as u64,
            &spl_token::id(),
        ),
        initialize_mint(
            &spl_token::id(),
            mint,
            mint_authority,
            None,
            native_mint::DECIMALS,
        )?,
    ])
}

/// Instructions creating `account` holding tokens of `mint` for `owner`.
pub fn create_token_account_instructions(
    payer: &Pubkey,
    account: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    rent: u64,
) -> Result<Vec<Instruction>> {
    Ok(vec![
        system_instruction::create_account(
            payer,
            account,
            rent,
            TokenAccount::LEN as u64,
            &spl_token::id(),
        ),
        initialize_account(&spl_token::id(), account, mint, owner)?,
    ])
}

/// Creates a mint with the native mint's decimals.
pub async fn create_mint(
    client: &RpcClient,
    payer: &dyn Signer,
    mint: &dyn Signer,
    mint_authority: &Pubkey,
) -> Result<Signature> {
    info!("Creating mint {}", mint.pubkey());
    let rent = client
        .get_minimum_balance_for_rent_exemption(TokenMint::LEN)
        .await?;
    let instructions =
        create_mint_instructions(&payer.pubkey(), &mint.pubkey(), mint_authority, rent)?;
    send_and_confirm(client, &instructions, payer, &[mint]).await
}

/// Creates a token account of `mint` owned by `owner`.
pub async fn create_token_account(
    client: &RpcClient,
    payer: &dyn Signer,
    account: &dyn Signer,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<Signature> {
    info!("Creating token account {}", account.pubkey());
    let rent = client
        .get_minimum_balance_for_rent_exemption(TokenAccount::LEN)
        .await?;
    let instructions = create_token_account_instructions(
        &payer.pubkey(),
        &account.pubkey(),
        mint,
        owner,
        rent,
    )?;
    send_and_confirm(client, &instructions, payer, &[account]).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_is_owned_by_token_program() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let instructions = create_mint_instructions(&payer, &mint, &authority, 10).unwrap();
        assert_eq!(instructions.len(), 2);
        assert_eq!(instructions[1].program_id, spl_token::id());
        assert_eq!(instructions[1].accounts[0].pubkey, mint);
    }

    #[test]
    fn token_account_points_at_mint() {
        let payer = Pubkey::new_unique();
        let account = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let instructions =
            create_token_account_instructions(&payer, &account, &mint, &owner, 10).unwrap();
        assert_eq!(instructions[1].accounts[0].pubkey, account);
        assert_eq!(instructions[1].accounts[1].pubkey, mint);
        assert_eq!(instructions[1].accounts[2].pubkey, owner);
    }
}
