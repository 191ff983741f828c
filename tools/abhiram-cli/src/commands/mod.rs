//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod shop;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Category to show (`all`, `fashion`, `electronics`, `home`).
    #[arg(short, long, conflicts_with = "footer")]
    pub category: Option<String>,

    /// Footer link to follow (`men`, `women`, `kids`, `beauty`, `home`, `electronics`).
    #[arg(long)]
    pub footer: Option<String>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search term.
    #[arg(num_args = 0..)]
    pub term: Vec<String>,
}

/// Arguments for the promote command.
#[derive(Args)]
pub struct PromoteArgs {
    /// Product to promote.
    pub product_id: String,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Start with an empty cart instead of the demo cart.
    #[arg(long)]
    pub empty: bool,

    /// Read session commands from a file instead of the prompt.
    #[arg(short, long)]
    pub script: Option<PathBuf>,
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
    /// Write a default abhiram.toml to the working directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
