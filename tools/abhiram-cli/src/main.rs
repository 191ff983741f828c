//! ABHIRAM CLI - Command line storefront for the ABHIRAM demo shop.
//!
//! Commands:
//! - `abhiram products` - List products, optionally by category
//! - `abhiram search` - Search the catalog
//! - `abhiram promote` - Show a promoter link and commission
//! - `abhiram shop` - Run a shopping session against an in-memory cart
//! - `abhiram config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use abhiram_observability::{init_tracing, LogLevel};
use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, ProductsArgs, PromoteArgs, SearchArgs, ShopArgs};

/// ABHIRAM - factory-direct storefront in your terminal
#[derive(Parser)]
#[command(name = "abhiram")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Search the catalog
    Search(SearchArgs),

    /// Show the promoter link and commission for a product
    Promote(PromoteArgs),

    /// Start a shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    if cli.verbose && !init_tracing(LogLevel::Debug, ctx.config.logging.format) {
        ctx.output.debug("tracing subscriber already installed");
    }

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::catalog::run_products(args, &ctx).await,
        Commands::Search(args) => commands::catalog::run_search(args, &ctx).await,
        Commands::Promote(args) => commands::catalog::run_promote(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
