#![cfg(feature = "test-validator")]

mod helpers;

use {
    helpers::*,
    solana_sdk::signature::Signer,
    spl_stake_pool::state::Fee,
    spl_stake_pool_client::stake_pool::{
        actions::create_all,
        constants::{find_withdraw_authority_program_address, MAX_VALIDATORS, STAKE_POOL_PROGRAM_ID},
        state::{get_stake_pool, get_validator_list},
    },
};

#[tokio::test]
async fn success_create_all() {
    let client = rpc_client();
    let payer = funded_payer(&client).await;
    let fee = Fee {
        numerator: 1,
        denominator: 1000,
    };
    let (stake_pool_address, validator_list_address, pool_mint) =
        create_all(&client, &payer, fee, 20).await.unwrap();

    let stake_pool = get_stake_pool(&client, &stake_pool_address).await.unwrap();
    assert!(stake_pool.is_valid());
    assert_eq!(stake_pool.manager, payer.pubkey());
    assert_eq!(stake_pool.staker, payer.pubkey());
    assert_eq!(stake_pool.validator_list, validator_list_address);
    assert_eq!(stake_pool.pool_mint, pool_mint);
    assert_eq!(stake_pool.epoch_fee, fee);
    assert_eq!(stake_pool.stake_referral_fee, 20);
    assert_eq!(stake_pool.sol_referral_fee, 20);

    let (withdraw_authority, bump) =
        find_withdraw_authority_program_address(&STAKE_POOL_PROGRAM_ID, &stake_pool_address);
    assert_eq!(stake_pool.stake_withdraw_bump_seed, bump);
    assert_ne!(withdraw_authority, payer.pubkey());

    let validator_list = get_validator_list(&client, &validator_list_address)
        .await
        .unwrap();
    assert_eq!(validator_list.header.max_validators, MAX_VALIDATORS);
    assert!(validator_list.validators.is_empty());
}
