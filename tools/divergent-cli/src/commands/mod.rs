//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products.
    List {
        /// Only products from this exhibition.
        #[arg(short, long)]
        exhibition: Option<String>,
    },
    /// Show a product's plaque.
    Show {
        /// Product slug or ID.
        product: String,
    },
    /// List exhibitions.
    Exhibitions,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add one of a product to the cart.
    Add {
        /// Product slug or ID.
        product: String,

        /// Size (prompted for when omitted on a terminal).
        #[arg(short, long)]
        size: Option<String>,
    },
    /// Remove a line from the cart.
    Remove {
        /// Product slug or ID.
        product: String,

        /// Size of the line to remove.
        #[arg(short, long)]
        size: String,
    },
    /// Set a line's quantity (values below 1 become 1).
    Update {
        /// Product slug or ID.
        product: String,

        /// Size of the line to update.
        #[arg(short, long)]
        size: String,

        /// New quantity.
        #[arg(short, long, allow_hyphen_values = true)]
        quantity: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the checkout summary.
    Checkout,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
