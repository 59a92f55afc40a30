//! Native vote program

pub mod constants;
