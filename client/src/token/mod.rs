//! SPL token program

pub mod actions;
