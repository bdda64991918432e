//! Command implementations for the Menulens CLI.

pub mod config;
pub mod serve;
