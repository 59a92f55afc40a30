//! Native stake program

pub mod actions;
pub mod constants;
