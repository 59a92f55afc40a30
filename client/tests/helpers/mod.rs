#![allow(dead_code)]

use {
    solana_program::native_token::LAMPORTS_PER_SOL,
    solana_sdk::{
        commitment_config::CommitmentConfig,
        signature::{Keypair, Signer},
    },
    spl_stake_pool_client::{
        solana_client::nonblocking::rpc_client::RpcClient, system::actions::airdrop,
    },
};

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";

/// Byte windows of the name, symbol and uri in a token metadata account.
pub const METADATA_NAME: std::ops::Range<usize> = 69..101;
pub const METADATA_SYMBOL: std::ops::Range<usize> = 105..115;
pub const METADATA_URI: std::ops::Range<usize> = 119..319;

pub fn rpc_client() -> RpcClient {
    let url = std::env::var("STAKE_POOL_TEST_RPC_URL")
        .unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
    RpcClient::new_with_commitment(url, CommitmentConfig::confirmed())
}

pub async fn funded_payer(client: &RpcClient) -> Keypair {
    let payer = Keypair::new();
    airdrop(client, &payer.pubkey(), 100 * LAMPORTS_PER_SOL)
        .await
        .unwrap();
    payer
}

/// Reads the padded utf-8 field in `window` of `data`.
pub fn metadata_field(data: &[u8], window: std::ops::Range<usize>) -> String {
    String::from_utf8_lossy(&data[window]).into_owned()
}

pub fn assert_metadata(data: &[u8], name: &str, symbol: &str, uri: &str) {
    assert!(metadata_field(data, METADATA_NAME).starts_with(name));
    assert!(metadata_field(data, METADATA_SYMBOL).starts_with(symbol));
    assert!(metadata_field(data, METADATA_URI).starts_with(uri));
}
