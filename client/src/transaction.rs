//! Transaction assembly and submission

use {
    crate::error::{Result, StakePoolClientError},
    log::debug,
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_program::{instruction::Instruction, message::Message, native_token::Sol},
    solana_sdk::{
        signature::{Signature, Signer},
        transaction::Transaction,
    },
};

macro_rules! unique_signers {
    ($vec:ident) => {
        $vec.sort_by_key(|l| l.pubkey());
        $vec.dedup_by_key(|l| l.pubkey());
    };
}

/// Signs `instructions` with `signers`, paid for by `payer`, then sends the
/// transaction and waits for confirmation at the client's commitment.
///
/// Signers may repeat; duplicates by pubkey are dropped before signing.
pub async fn send_and_confirm(
    client: &RpcClient,
    instructions: &[Instruction],
    payer: &dyn Signer,
    signers: &[&dyn Signer],
) -> Result<Signature> {
    let mut signers: Vec<&dyn Signer> = signers.iter().copied().chain([payer]).collect();
    unique_signers!(signers);

    let recent_blockhash = client.get_latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &signers,
        recent_blockhash,
    );
    let signature = client.send_and_confirm_transaction(&transaction).await?;
    debug!("Signature: {}", signature);
    Ok(signature)
}

/// Fails with [`StakePoolClientError::InsufficientFunds`] when `payer` cannot
/// cover `rent` lamports plus the fee of a transaction carrying `instructions`.
///
/// The fee is priced against the latest blockhash; nodes do not price
/// messages carrying an unknown one.
pub async fn check_fee_payer_balance(
    client: &RpcClient,
    payer: &dyn Signer,
    instructions: &[Instruction],
    rent: u64,
) -> Result<()> {
    let recent_blockhash = client.get_latest_blockhash().await?;
    let message =
        Message::new_with_blockhash(instructions, Some(&payer.pubkey()), &recent_blockhash);
    let fee = client.get_fee_for_message(&message).await?;
    let required = rent.saturating_add(fee);
    let available = client.get_balance(&payer.pubkey()).await?;
    if available < required {
        Err(StakePoolClientError::InsufficientFunds {
            payer: payer.pubkey(),
            required: Sol(required),
            available: Sol(available),
        })
    } else {
        Ok(())
    }
}
