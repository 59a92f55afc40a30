#![cfg(feature = "test-validator")]

mod helpers;

use {
    helpers::*,
    spl_stake_pool::state::Fee,
    spl_stake_pool_client::stake_pool::{
        actions::{create_all, create_token_metadata, update_token_metadata},
        state::{get_stake_pool, get_token_metadata_account},
    },
};

const FEE: Fee = Fee {
    numerator: 1,
    denominator: 1000,
};
const REFERRAL_FEE: u8 = 20;

#[tokio::test]
async fn success_create_metadata() {
    let client = rpc_client();
    let payer = funded_payer(&client).await;
    let (stake_pool_address, _validator_list_address, _) =
        create_all(&client, &payer, FEE, REFERRAL_FEE).await.unwrap();
    let stake_pool = get_stake_pool(&client, &stake_pool_address).await.unwrap();

    let name = "test_name";
    let symbol = "SYM";
    let uri = "test_uri";
    create_token_metadata(&client, &payer, &stake_pool_address, name, symbol, uri)
        .await
        .unwrap();

    let (_metadata_address, data) = get_token_metadata_account(&client, &stake_pool.pool_mint)
        .await
        .unwrap();
    assert_metadata(&data, name, symbol, uri);
}

#[tokio::test]
async fn success_update_metadata() {
    let client = rpc_client();
    let payer = funded_payer(&client).await;
    let (stake_pool_address, _validator_list_address, _) =
        create_all(&client, &payer, FEE, REFERRAL_FEE).await.unwrap();
    let stake_pool = get_stake_pool(&client, &stake_pool_address).await.unwrap();

    let name = "test_name";
    let symbol = "SYM";
    let uri = "test_uri";
    create_token_metadata(&client, &payer, &stake_pool_address, name, symbol, uri)
        .await
        .unwrap();

    let (_metadata_address, data) = get_token_metadata_account(&client, &stake_pool.pool_mint)
        .await
        .unwrap();
    assert_metadata(&data, name, symbol, uri);

    let updated_name = "updated_name";
    let updated_symbol = "USM";
    let updated_uri = "updated_uri";
    update_token_metadata(
        &client,
        &payer,
        &stake_pool_address,
        updated_name,
        updated_symbol,
        updated_uri,
    )
    .await
    .unwrap();

    let (_metadata_address, data) = get_token_metadata_account(&client, &stake_pool.pool_mint)
        .await
        .unwrap();
    assert_metadata(&data, updated_name, updated_symbol, updated_uri);
}
