//! Fetching stake pool accounts

use {
    super::constants::find_metadata_account,
    crate::error::{Result, StakePoolClientError},
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_program::{borsh0_10::try_from_slice_unchecked, pubkey::Pubkey},
    spl_stake_pool::state::{StakePool, ValidatorList},
};

/// Returns the data of the account at `address`, read at the client's
/// commitment.
pub async fn get_account_data(client: &RpcClient, address: &Pubkey) -> Result<Vec<u8>> {
    client
        .get_account_with_commitment(address, client.commitment())
        .await?
        .value
        .map(|account| account.data)
        .ok_or(StakePoolClientError::AccountNotFound(*address))
}

/// Decodes stake pool account data read from `address`. Trailing bytes are
/// ignored.
pub fn decode_stake_pool(address: &Pubkey, data: &[u8]) -> Result<StakePool> {
    try_from_slice_unchecked::<StakePool>(data).map_err(|err| {
        StakePoolClientError::InvalidAccount {
            kind: "stake pool",
            address: *address,
            reason: err.to_string(),
        }
    })
}

/// Decodes validator list account data read from `address`.
pub fn decode_validator_list(address: &Pubkey, data: &[u8]) -> Result<ValidatorList> {
    try_from_slice_unchecked::<ValidatorList>(data).map_err(|err| {
        StakePoolClientError::InvalidAccount {
            kind: "validator list",
            address: *address,
            reason: err.to_string(),
        }
    })
}

/// Fetches and decodes the stake pool at `address`.
pub async fn get_stake_pool(client: &RpcClient, address: &Pubkey) -> Result<StakePool> {
    let data = get_account_data(client, address).await?;
    decode_stake_pool(address, &data)
}

/// Fetches and decodes the validator list at `address`.
pub async fn get_validator_list(client: &RpcClient, address: &Pubkey) -> Result<ValidatorList> {
    let data = get_account_data(client, address).await?;
    decode_validator_list(address, &data)
}

/// Returns the address and raw data of the metadata account of `mint`.
///
/// The data is left undecoded, its layout belongs to the metadata program.
pub async fn get_token_metadata_account(
    client: &RpcClient,
    mint: &Pubkey,
) -> Result<(Pubkey, Vec<u8>)> {
    let (address, _) = find_metadata_account(mint);
    let data = get_account_data(client, &address).await?;
    Ok((address, data))
}
