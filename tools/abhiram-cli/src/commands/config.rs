//! Configuration management commands.

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv("currency", config.store.currency.code());
    ctx.output
        .kv("seed_demo_cart", &config.store.seed_demo_cart.to_string());

    ctx.output.info("[checkout]");
    ctx.output.kv("delay_ms", &config.checkout.delay_ms.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("level", &config.logging.level.to_string());
    ctx.output.kv("format", &format!("{:?}", config.logging.format));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    ctx.output
        .success(&format!("Wrote {}", path.display()));
    Ok(())
}
