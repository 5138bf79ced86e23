//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --precision, --config) are inherited by all subcommands
//! - `area` reads descriptors from stdin when none are given on the command line

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Money;

/// solidkit - SOLID design principles, corrected
#[derive(Parser, Debug)]
#[command(name = "solidkit")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Shape descriptors look like 'rectangle:1,2', 'square 2' or 'circle:2.5'."
)]
pub struct Cli {
    /// Output NDJSON (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decimal places for printed numbers
    #[arg(long, global = true, value_name = "N")]
    pub precision: Option<usize>,

    /// Config file (default: ./solidkit.toml, then user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneModel {
    /// Calls, camera and Wi-Fi
    Smartphone,
    /// Calls only
    Feature,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorKind {
    /// Approve every payment
    Approve,
    /// Decline every payment
    Decline,
    /// Approve payments up to --limit
    Limit,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the area of each shape, one per line, in input order
    Area {
        /// Shape descriptors; read from stdin (one per line) when omitted
        #[arg(value_name = "DESCRIPTOR")]
        descriptors: Vec<String>,

        /// Also print the total area
        #[arg(long)]
        total: bool,
    },

    /// Print the driving range of a standard or hybrid vehicle
    Range {
        /// Fuel capacity
        #[arg(long, allow_negative_numbers = true)]
        capacity: f64,

        /// Distance per unit of fuel
        #[arg(long, allow_negative_numbers = true)]
        efficiency: f64,

        /// Extra electric range (makes the vehicle a hybrid)
        #[arg(long, allow_negative_numbers = true)]
        electric: Option<f64>,
    },

    /// Show which capabilities a phone has and try them
    Phone {
        /// Phone model
        #[arg(value_enum)]
        model: PhoneModel,

        /// Number to call
        #[arg(long)]
        call: Option<String>,

        /// Take a photo
        #[arg(long)]
        photo: bool,

        /// Network to join
        #[arg(long)]
        wifi: Option<String>,
    },

    /// Process a purchase through a payment processor
    Pay {
        /// Amount, e.g. 12.50
        #[arg(long)]
        amount: Money,

        /// Payment processor to inject
        #[arg(long, value_enum, default_value = "approve")]
        processor: ProcessorKind,

        /// Ceiling for the limit processor
        #[arg(long, required_if_eq("processor", "limit"))]
        limit: Option<Money>,

        /// Account to charge
        #[arg(long, default_value = "demo")]
        account: String,

        /// Order reference handed to the processor
        #[arg(long)]
        reference: Option<String>,
    },

    /// Add items to a todo list, optionally remove some, and print it
    Todo {
        /// Items to add
        items: Vec<String>,

        /// Index to remove (can be specified multiple times)
        #[arg(long)]
        remove: Vec<usize>,

        /// List name
        #[arg(long, default_value = "default")]
        list: String,
    },
}
