//! Stake pool actions

use {
    super::{
        constants::{
            find_withdraw_authority_program_address, MAX_VALIDATORS, MINIMUM_RESERVE_LAMPORTS,
            STAKE_POOL_PROGRAM_ID,
        },
        state::get_stake_pool,
    },
    crate::{
        error::Result,
        stake::actions::create_stake,
        token::actions::{create_mint, create_token_account},
        transaction::{check_fee_payer_balance, send_and_confirm},
    },
    log::{debug, info},
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_program::{
        borsh0_10::{get_instance_packed_len, get_packed_len},
        instruction::Instruction,
        pubkey::Pubkey,
        system_instruction,
    },
    solana_sdk::signature::{Keypair, Signature, Signer},
    spl_stake_pool::{
        instruction as pool_instruction,
        state::{Fee, StakePool, ValidatorList},
    },
};

/// Accounts a new stake pool is initialized with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolAccounts {
    /// Stake pool state account
    pub stake_pool: Pubkey,
    /// Validator list storage account
    pub validator_list: Pubkey,
    /// Pool token mint, minted by the withdraw authority
    pub pool_mint: Pubkey,
    /// Reserve stake account, authorized to the withdraw authority
    pub reserve_stake: Pubkey,
    /// Token account receiving manager fees
    pub manager_fee_account: Pubkey,
}

/// Instructions allocating the pool and validator list accounts and
/// initializing the pool, with `fee` charged on epoch rewards, withdrawals and
/// deposits.
#[allow(clippy::too_many_arguments)]
pub fn create_pool_instructions(
    payer: &Pubkey,
    manager: &Pubkey,
    accounts: &PoolAccounts,
    pool_size: usize,
    pool_rent: u64,
    validator_list_size: usize,
    validator_list_rent: u64,
    fee: Fee,
    referral_fee: u8,
) -> Vec<Instruction> {
    let (withdraw_authority, _) =
        find_withdraw_authority_program_address(&STAKE_POOL_PROGRAM_ID, &accounts.stake_pool);
    vec![
        // Account for the stake pool
        system_instruction::create_account(
            payer,
            &accounts.stake_pool,
            pool_rent,
            pool_size as u64,
            &STAKE_POOL_PROGRAM_ID,
        ),
        // Validator stake account list storage
        system_instruction::create_account(
            payer,
            &accounts.validator_list,
            validator_list_rent,
            validator_list_size as u64,
            &STAKE_POOL_PROGRAM_ID,
        ),
        pool_instruction::initialize(
            &STAKE_POOL_PROGRAM_ID,
            &accounts.stake_pool,
            manager,
            manager,
            &withdraw_authority,
            &accounts.validator_list,
            &accounts.reserve_stake,
            &accounts.pool_mint,
            &accounts.manager_fee_account,
            &spl_token::id(),
            None,
            fee,
            fee,
            fee,
            referral_fee,
            MAX_VALIDATORS,
        ),
    ]
}

/// Creates and initializes a stake pool managed by `manager`, who also pays.
///
/// The mint, reserve stake and manager fee account must already exist.
#[allow(clippy::too_many_arguments)]
pub async fn create(
    client: &RpcClient,
    manager: &dyn Signer,
    stake_pool: &dyn Signer,
    validator_list: &dyn Signer,
    pool_mint: &Pubkey,
    reserve_stake: &Pubkey,
    manager_fee_account: &Pubkey,
    fee: Fee,
    referral_fee: u8,
) -> Result<Signature> {
    info!("Creating stake pool {}", stake_pool.pubkey());

    let pool_size = get_packed_len::<StakePool>();
    let pool_rent = client
        .get_minimum_balance_for_rent_exemption(pool_size)
        .await?;
    let validator_list_size =
        get_instance_packed_len(&ValidatorList::new(MAX_VALIDATORS))?;
    let validator_list_rent = client
        .get_minimum_balance_for_rent_exemption(validator_list_size)
        .await?;

    let accounts = PoolAccounts {
        stake_pool: stake_pool.pubkey(),
        validator_list: validator_list.pubkey(),
        pool_mint: *pool_mint,
        reserve_stake: *reserve_stake,
        manager_fee_account: *manager_fee_account,
    };
    let instructions = create_pool_instructions(
        &manager.pubkey(),
        &manager.pubkey(),
        &accounts,
        pool_size,
        pool_rent,
        validator_list_size,
        validator_list_rent,
        fee,
        referral_fee,
    );
    check_fee_payer_balance(
        client,
        manager,
        &instructions,
        pool_rent.saturating_add(validator_list_rent),
    )
    .await?;
    send_and_confirm(
        client,
        &instructions,
        manager,
        &[stake_pool, validator_list],
    )
    .await
}

/// Creates every account a stake pool needs and initializes the pool.
///
/// Returns the addresses of the stake pool, its validator list and its mint.
pub async fn create_all(
    client: &RpcClient,
    manager: &dyn Signer,
    fee: Fee,
    referral_fee: u8,
) -> Result<(Pubkey, Pubkey, Pubkey)> {
    let stake_pool = Keypair::new();
    let validator_list = Keypair::new();
    let (withdraw_authority, _) =
        find_withdraw_authority_program_address(&STAKE_POOL_PROGRAM_ID, &stake_pool.pubkey());
    debug!("Stake pool withdraw authority {}", withdraw_authority);

    let reserve_stake = Keypair::new();
    create_stake(
        client,
        manager,
        &reserve_stake,
        &withdraw_authority,
        MINIMUM_RESERVE_LAMPORTS,
    )
    .await?;

    let pool_mint = Keypair::new();
    create_mint(client, manager, &pool_mint, &withdraw_authority).await?;

    let manager_fee_account = Keypair::new();
    create_token_account(
        client,
        manager,
        &manager_fee_account,
        &pool_mint.pubkey(),
        &manager.pubkey(),
    )
    .await?;

    create(
        client,
        manager,
        &stake_pool,
        &validator_list,
        &pool_mint.pubkey(),
        &reserve_stake.pubkey(),
        &manager_fee_account.pubkey(),
        fee,
        referral_fee,
    )
    .await?;

    Ok((
        stake_pool.pubkey(),
        validator_list.pubkey(),
        pool_mint.pubkey(),
    ))
}

/// Instruction creating the metadata account of `pool_mint`, authorized by
/// the pool `manager` and funded by `payer`.
pub fn create_token_metadata_instruction(
    stake_pool_address: &Pubkey,
    manager: &Pubkey,
    pool_mint: &Pubkey,
    payer: &Pubkey,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Instruction {
    pool_instruction::create_token_metadata(
        &STAKE_POOL_PROGRAM_ID,
        stake_pool_address,
        manager,
        pool_mint,
        payer,
        name.to_string(),
        symbol.to_string(),
        uri.to_string(),
    )
}

/// Instruction rewriting the metadata of `pool_mint`, authorized by the pool
/// `manager`.
pub fn update_token_metadata_instruction(
    stake_pool_address: &Pubkey,
    manager: &Pubkey,
    pool_mint: &Pubkey,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Instruction {
    pool_instruction::update_token_metadata(
        &STAKE_POOL_PROGRAM_ID,
        stake_pool_address,
        manager,
        pool_mint,
        name.to_string(),
        symbol.to_string(),
        uri.to_string(),
    )
}

/// Creates the metadata account of the pool mint. `manager` must be the pool
/// manager and pays for the account.
pub async fn create_token_metadata(
    client: &RpcClient,
    manager: &dyn Signer,
    stake_pool_address: &Pubkey,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Result<Signature> {
    let stake_pool = get_stake_pool(client, stake_pool_address).await?;
    info!(
        "Creating token metadata for pool mint {}",
        stake_pool.pool_mint
    );
    let instruction = create_token_metadata_instruction(
        stake_pool_address,
        &manager.pubkey(),
        &stake_pool.pool_mint,
        &manager.pubkey(),
        name,
        symbol,
        uri,
    );
    send_and_confirm(client, &[instruction], manager, &[]).await
}

/// Rewrites the name, symbol and uri in the metadata account of the pool
/// mint. `manager` must be the pool manager.
pub async fn update_token_metadata(
    client: &RpcClient,
    manager: &dyn Signer,
    stake_pool_address: &Pubkey,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Result<Signature> {
    let stake_pool = get_stake_pool(client, stake_pool_address).await?;
    info!(
        "Updating token metadata for pool mint {}",
        stake_pool.pool_mint
    );
    let instruction = update_token_metadata_instruction(
        stake_pool_address,
        &manager.pubkey(),
        &stake_pool.pool_mint,
        name,
        symbol,
        uri,
    );
    send_and_confirm(client, &[instruction], manager, &[]).await
}
