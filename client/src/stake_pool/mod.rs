//! SPL stake pool program

pub mod actions;
pub mod constants;
pub mod state;
