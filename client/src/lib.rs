#![deny(missing_docs)]

//! Client-side helpers for driving an SPL stake pool over JSON RPC: well-known
//! program addresses, account sizes, and async actions that build, sign and
//! send the transactions a pool needs.

pub mod error;
pub mod stake;
pub mod stake_pool;
pub mod system;
pub mod token;
pub mod transaction;
pub mod vote;

pub use error::{Result, StakePoolClientError};

// Export current sdk types for downstream users building with a different sdk
// version
pub use solana_client;
pub use spl_stake_pool;
