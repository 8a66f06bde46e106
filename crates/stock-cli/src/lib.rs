//! CLI library components for the stock sheet processor.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
pub mod types;
