//! Error types

use {
    solana_client::client_error::ClientError,
    solana_program::{native_token::Sol, program_error::ProgramError, pubkey::Pubkey},
    solana_sdk::signature::Signature,
    thiserror::Error,
};

/// Errors that may be returned by the stake pool client.
#[derive(Debug, Error)]
pub enum StakePoolClientError {
    /// The RPC node rejected a request or could not be reached.
    #[error(transparent)]
    Client(#[from] ClientError),
    /// An instruction could not be built.
    #[error(transparent)]
    Program(#[from] ProgramError),
    /// Sizing an account failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The account does not exist at the requested commitment.
    #[error("Account {0} not found")]
    AccountNotFound(Pubkey),
    /// The account exists but its data is not what was expected.
    #[error("Invalid {kind} {address}: {reason}")]
    InvalidAccount {
        /// What the account was expected to hold.
        kind: &'static str,
        /// Account address.
        address: Pubkey,
        /// Decoder message.
        reason: String,
    },
    /// The transaction did not reach the requested commitment in time.
    #[error("Transaction {0} was not confirmed in time")]
    Unconfirmed(Signature),
    /// The fee payer cannot cover rent and fees for the transaction.
    #[error("Fee payer, {payer}, has insufficient balance: {required} required, {available} available")]
    InsufficientFunds {
        /// Fee payer address.
        payer: Pubkey,
        /// Amount needed.
        required: Sol,
        /// Amount held.
        available: Sol,
    },
}

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, StakePoolClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_funds_reports_sol() {
        let payer = Pubkey::new_unique();
        let err = StakePoolClientError::InsufficientFunds {
            payer,
            required: Sol(1_500_000_000),
            available: Sol(500_000_000),
        };
        assert_eq!(
            err.to_string(),
            format!(
                "Fee payer, {}, has insufficient balance: ◎1.500000000 required, ◎0.500000000 available",
                payer
            )
        );
    }

    #[test]
    fn invalid_account_names_kind() {
        let address = Pubkey::new_unique();
        let err = StakePoolClientError::InvalidAccount {
            kind: "stake pool",
            address,
            reason: "unexpected length".to_string(),
        };
        assert_eq!(
            err.to_string(),
            format!("Invalid stake pool {}: unexpected length", address)
        );
    }
}
