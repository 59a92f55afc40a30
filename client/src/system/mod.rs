//! Native system program

pub mod actions;
