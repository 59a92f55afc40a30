//! Vote program constants

use solana_program::{pubkey, pubkey::Pubkey};

/// Program id for the native vote program.
pub const VOTE_PROGRAM_ID: Pubkey = pubkey!("Vote111111111111111111111111111111111111111");

/// Size of vote account.
pub const VOTE_STATE_LEN: usize = 3762;

#[cfg(test)]
mod tests {
    use {super::*, solana_program::vote::state::VoteState};

    #[test]
    fn matches_native_vote_program() {
        assert_eq!(VOTE_PROGRAM_ID, solana_program::vote::program::id());
        assert_eq!(VOTE_STATE_LEN, VoteState::size_of());
    }
}
