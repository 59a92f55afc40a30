//! Faucet actions

use {
    crate::error::{Result, StakePoolClientError},
    log::info,
    solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcRequestAirdropConfig},
    solana_program::pubkey::Pubkey,
    solana_sdk::{commitment_config::CommitmentConfig, signature::Signature},
    std::time::{Duration, Instant},
};

/// How long an airdrop may take to reach `confirmed`.
pub const AIRDROP_CONFIRM_TIMEOUT: Duration = Duration::from_secs(30);

const STATUS_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Requests `lamports` for `receiver` from the node's faucet and waits for the
/// airdrop to reach `confirmed`.
///
/// Fails if the airdrop transaction itself failed or did not confirm within
/// [`AIRDROP_CONFIRM_TIMEOUT`].
pub async fn airdrop(client: &RpcClient, receiver: &Pubkey, lamports: u64) -> Result<Signature> {
    info!("Airdropping {} lamports to {}...", lamports, receiver);
    let commitment = CommitmentConfig::confirmed();
    let signature = client
        .request_airdrop_with_config(
            receiver,
            lamports,
            RpcRequestAirdropConfig {
                commitment: Some(commitment),
                ..RpcRequestAirdropConfig::default()
            },
        )
        .await?;

    let started = Instant::now();
    loop {
        if let Some(status) = client
            .get_signature_status_with_commitment(&signature, commitment)
            .await?
        {
            status.map_err(|err| StakePoolClientError::Client(err.into()))?;
            return Ok(signature);
        }
        if started.elapsed() > AIRDROP_CONFIRM_TIMEOUT {
            return Err(StakePoolClientError::Unconfirmed(signature));
        }
        tokio::time::sleep(STATUS_POLL_INTERVAL).await;
    }
}
