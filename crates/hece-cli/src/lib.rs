//! Hece CLI library.
//!
//! Argument definitions and command implementations for the `hece` binary.

pub mod cli_args;
pub mod commands;
