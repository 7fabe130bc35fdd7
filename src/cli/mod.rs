//! CLI module - Command-line interface for Intake
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Intake - Inventory intake tracker
/// Records incoming items and keeps a running total per item name
#[derive(Parser)]
#[command(name = "intake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API and web form
    #[command(alias = "daemon")]
    Serve {
        /// Keep records in memory instead of the configured database
        #[arg(long)]
        in_memory: bool,
    },

    /// Record an item, creating it or adding to its quantity
    #[command(alias = "r")]
    Record {
        /// Item name (surrounding whitespace is ignored)
        name: String,
        /// Quantity received
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Add to the quantity of an existing item only
    AddQuantity {
        /// Item name
        name: String,
        /// Quantity to add
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Show the most recently recorded items
    #[command(alias = "l")]
    Latest,

    /// List all items, most recent first
    #[command(alias = "ls")]
    List {
        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: u64,
        /// Items per page
        #[arg(long, default_value = "10")]
        limit: u64,
    },

    /// Show a single item by exact name
    #[command(alias = "s")]
    Show {
        /// Item name
        name: String,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
