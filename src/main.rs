//! solidkit CLI
//!
//! Usage: solidkit <COMMAND>
//!
//! Commands:
//!   area   Print the area of each shape, one per line
//!   range  Print a vehicle's driving range
//!   phone  Show and try a phone's capabilities
//!   pay    Process a purchase through a payment processor
//!   todo   Edit and print a todo list

mod commands;

use anyhow::Result;
use clap::Parser;

use solidkit::presentation::{Cli, Commands};

use commands::{cmd_area, cmd_pay, cmd_phone, cmd_range, cmd_todo, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        Commands::Area { descriptors, total } => cmd_area(&ctx, &descriptors, total),
        Commands::Range {
            capacity,
            efficiency,
            electric,
        } => cmd_range(&ctx, capacity, efficiency, electric),
        Commands::Phone {
            model,
            call,
            photo,
            wifi,
        } => cmd_phone(&ctx, model, call.as_deref(), photo, wifi.as_deref()),
        Commands::Pay {
            amount,
            processor,
            limit,
            account,
            reference,
        } => cmd_pay(&ctx, amount, processor, limit, &account, reference),
        Commands::Todo {
            items,
            remove,
            list,
        } => cmd_todo(&ctx, items, remove, list),
    }
}
