//! CLI module for the Item Admission Gateway
//!
//! Provides subcommands for exercising the admission service:
//! - `simulate`: fire concurrent submissions and report outcomes

pub mod simulate;

use clap::{Parser, Subcommand};

/// Item Admission Gateway - Deduplicating admission layer for concurrent content submissions
#[derive(Parser)]
#[command(name = "item-admission-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fire concurrent submissions at the admission service
    Simulate(simulate::SimulateArgs),
}
