//! Command-line interface for the vanishing tic-tac-toe binary.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;

pub use args::Vanishing;
