//! Shopping session command.
//!
//! Opens one [`ShopSession`], feeds it commands from the prompt, a script
//! file or piped stdin, and closes it when input ends or `quit` is read.

use std::time::Duration;

use abhiram_commerce::prelude::*;
use abhiram_observability::{LogFormat, SessionLogger};
use anyhow::{Context as _, Result};
use dialoguer::Input;
use serde::Serialize;

use super::{catalog, ShopArgs};
use crate::context::Context;
use crate::output::format_timestamp;

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    Products(Option<String>),
    Search(String),
    Add(ProductId),
    Remove(ProductId),
    Cart,
    Checkout,
    Clear,
    Promote(ProductId),
    Help,
    Quit,
}

impl ShopCommand {
    /// Parse a session line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let product_arg = |usage: &str| {
            if rest.is_empty() {
                Err(format!("usage: {}", usage))
            } else {
                Ok(ProductId::new(rest))
            }
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "products" | "ls" => ShopCommand::Products((!rest.is_empty()).then(|| rest.to_string())),
            "search" => ShopCommand::Search(rest.to_string()),
            "add" => ShopCommand::Add(product_arg("add <product-id>")?),
            "remove" | "rm" => ShopCommand::Remove(product_arg("remove <product-id>")?),
            "cart" => ShopCommand::Cart,
            "checkout" => ShopCommand::Checkout,
            "clear" => ShopCommand::Clear,
            "promote" => ShopCommand::Promote(product_arg("promote <product-id>")?),
            "help" | "?" => ShopCommand::Help,
            "quit" | "exit" | "q" => ShopCommand::Quit,
            other => return Err(format!("unknown command: {} (try `help`)", other)),
        };
        Ok(Some(command))
    }
}

#[derive(Serialize)]
struct CartView<'a> {
    lines: &'a [CartLine],
    item_count: u64,
    total: Money,
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let mut session = if args.empty || !ctx.config.store.seed_demo_cart {
        ShopSession::open(ctx.config.store.currency)
    } else {
        ShopSession::open_with_demo_cart()
    };
    let logger = session_logger(&session, ctx);
    logger
        .info_builder("session opened")
        .field_u64("items", session.cart().total_item_count())
        .emit();

    ctx.output
        .header(&format!("Welcome to {}", ctx.config.store.name));
    ctx.output.info("Type `help` for commands.");

    for line in line_source(&args, ctx)? {
        let command = match ShopCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                ctx.output.warn(&msg);
                continue;
            }
        };
        if command == ShopCommand::Quit {
            break;
        }

        if let Err(e) = execute(command, &mut session, ctx, &logger).await {
            ctx.output.warn(&format!("{:#}", e));
            logger
                .warn_builder("command failed")
                .field("error", format!("{:#}", e))
                .emit();
        }
    }

    let summary = session.close();
    logger
        .info_builder("session closed")
        .field_u64("items_discarded", summary.items_discarded)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&summary);
    } else if summary.items_discarded > 0 {
        ctx.output.info(&format!(
            "Session ended; {} item(s) left in the cart were discarded.",
            summary.items_discarded
        ));
    }
    Ok(())
}

fn session_logger(session: &ShopSession, ctx: &Context) -> SessionLogger {
    let format = if ctx.output.is_json() {
        LogFormat::Json
    } else {
        ctx.config.logging.format
    };
    SessionLogger::new(session.id().clone())
        .with_component("shop")
        .with_min_level(ctx.config.logging.level)
        .with_format(format)
}

fn line_source(args: &ShopArgs, ctx: &Context) -> Result<Box<dyn Iterator<Item = String>>> {
    if let Some(path) = &args.script {
        let path = ctx.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session script: {}", path.display()))?;
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        return Ok(Box::new(lines.into_iter()));
    }

    if console::user_attended() {
        return Ok(Box::new(std::iter::from_fn(|| {
            Input::<String>::new()
                .with_prompt("abhiram")
                .allow_empty(true)
                .interact_text()
                .ok()
        })));
    }

    Ok(Box::new(std::io::stdin().lines().map_while(Result::ok)))
}

/// Apply one command to the session.
pub async fn execute(
    command: ShopCommand,
    session: &mut ShopSession,
    ctx: &Context,
    logger: &SessionLogger,
) -> Result<()> {
    match command {
        ShopCommand::Products(category) => {
            let filter = match category {
                Some(category) => CategoryFilter::parse(&category)?,
                None => CategoryFilter::All,
            };
            catalog::list_products(ctx, filter);
        }
        ShopCommand::Search(term) => catalog::search(ctx, &term)?,
        ShopCommand::Add(product_id) => add_to_cart(session, &product_id, ctx, logger)?,
        ShopCommand::Remove(product_id) => {
            let removed = session.cart_mut().remove(&product_id);
            logger
                .info_builder("remove from cart")
                .field("product_id", product_id.as_str())
                .field_bool("removed", removed)
                .emit();
            if removed {
                ctx.output.info("Item removed from cart");
            } else {
                ctx.output
                    .info(&format!("Product {} was not in the cart", product_id));
            }
            show_cart(session.cart(), ctx)?;
        }
        ShopCommand::Cart => show_cart(session.cart(), ctx)?,
        ShopCommand::Checkout => checkout(session, ctx, logger).await?,
        ShopCommand::Clear => {
            session.cart_mut().clear();
            logger.info("cart cleared");
            ctx.output.info("Cart cleared");
        }
        ShopCommand::Promote(product_id) => catalog::promote(ctx, &product_id)?,
        ShopCommand::Help => print_help(ctx),
        ShopCommand::Quit => {}
    }
    Ok(())
}

fn add_to_cart(
    session: &mut ShopSession,
    product_id: &ProductId,
    ctx: &Context,
    logger: &SessionLogger,
) -> Result<()> {
    let product = ctx.catalog.require(product_id)?;
    let items = session.cart_mut().add(
        product.id.clone(),
        product.name.clone(),
        &product.price_label(),
        product.image.clone(),
    )?;

    logger
        .info_builder("added to cart")
        .field("product_id", product.id.as_str())
        .field_u64("items", items)
        .emit();
    ctx.output
        .success(&format!("{} added to cart!", product.name));
    ctx.output.kv("items in cart", &items.to_string());
    Ok(())
}

fn show_cart(cart: &Cart, ctx: &Context) -> Result<()> {
    let total = cart.grand_total()?;

    if ctx.output.is_json() {
        ctx.output.json(&CartView {
            lines: cart.lines(),
            item_count: cart.total_item_count(),
            total,
        });
        return Ok(());
    }

    ctx.output.header("Your cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
    } else {
        let widths = [26, 14, 10];
        for line in cart.lines() {
            let line_total = line.line_total()?;
            ctx.output.table_row(
                &[
                    line.name.as_str(),
                    format!("{} x {}", line.unit_price.display(), line.quantity).as_str(),
                    line_total.display().as_str(),
                ],
                &widths,
            );
        }
    }
    ctx.output.kv("Items", &cart.total_item_count().to_string());
    ctx.output.kv("Total", &total.display());
    Ok(())
}

async fn checkout(session: &mut ShopSession, ctx: &Context, logger: &SessionLogger) -> Result<()> {
    if session.cart().state() == CartState::Empty {
        logger
            .warn_builder("checkout rejected")
            .field_bool("empty", true)
            .emit();
        ctx.output.warn("Your cart is empty!");
        return Ok(());
    }

    ctx.output.info("Proceeding to checkout...");
    let spinner = ctx.output.spinner("Processing order");
    tokio::time::sleep(Duration::from_millis(ctx.config.checkout.delay_ms)).await;
    let result = session.cart_mut().place_order();
    spinner.finish_and_clear();
    let order = result?;

    logger
        .info_builder("checkout complete")
        .field("order_id", order.id.as_str())
        .field_u64("items", order.item_count)
        .field_u64("total", order.total.amount)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success("Checkout Complete!");
    ctx.output.kv("Order", order.id.as_str());
    ctx.output.kv("Items", &order.item_count.to_string());
    ctx.output.kv("Total Amount", &order.total.display());
    ctx.output.kv("Placed", &format_timestamp(order.placed_at));
    ctx.output.info(&format!(
        "Thank you for shopping with {}!",
        ctx.config.store.name
    ));
    Ok(())
}

fn print_help(ctx: &Context) {
    ctx.output.header("Commands");
    for item in [
        "products [all|fashion|electronics|home]",
        "search <term>",
        "add <product-id>",
        "remove <product-id>",
        "cart",
        "checkout",
        "clear",
        "promote <product-id>",
        "quit",
    ] {
        ctx.output.list_item(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;

    fn test_context() -> Context {
        let mut config = CliConfig::default();
        config.checkout.delay_ms = 0;
        Context {
            config,
            config_path: None,
            output: Output::new(false, true),
            catalog: Catalog::sample(),
            cwd: std::env::temp_dir(),
        }
    }

    fn parse(line: &str) -> ShopCommand {
        ShopCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("add 2"), ShopCommand::Add(ProductId::new("2")));
        assert_eq!(parse("  RM 1 "), ShopCommand::Remove(ProductId::new("1")));
        assert_eq!(parse("search smart watch"), ShopCommand::Search("smart watch".to_string()));
        assert_eq!(parse("products"), ShopCommand::Products(None));
        assert_eq!(parse("products home"), ShopCommand::Products(Some("home".to_string())));
        assert_eq!(parse("checkout"), ShopCommand::Checkout);
        assert_eq!(parse("q"), ShopCommand::Quit);
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(ShopCommand::parse(""), Ok(None));
        assert_eq!(ShopCommand::parse("   "), Ok(None));
        assert_eq!(ShopCommand::parse("# add 1"), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            ShopCommand::parse("add"),
            Err("usage: add <product-id>".to_string())
        );
        assert!(ShopCommand::parse("dance").is_err());
    }

    #[tokio::test]
    async fn test_session_flow() {
        let ctx = test_context();
        let mut session = ShopSession::open(Currency::INR);
        let logger = session_logger(&session, &ctx)
            .with_min_level(abhiram_observability::LogLevel::Error);

        for line in ["add 3", "add 2", "add 3", "remove 2", "remove 2"] {
            execute(parse(line), &mut session, &ctx, &logger).await.unwrap();
        }
        let line = session.cart().get(&ProductId::new("3")).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(session.cart().len(), 1);

        execute(ShopCommand::Checkout, &mut session, &ctx, &logger)
            .await
            .unwrap();
        assert!(session.cart().is_empty());

        execute(ShopCommand::Checkout, &mut session, &ctx, &logger)
            .await
            .unwrap();
        assert!(session.cart().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_product_leaves_cart_alone() {
        let ctx = test_context();
        let mut session = ShopSession::open_with_demo_cart();
        let logger = session_logger(&session, &ctx)
            .with_min_level(abhiram_observability::LogLevel::Error);

        let result = execute(parse("add 42"), &mut session, &ctx, &logger).await;
        assert!(result.is_err());
        assert_eq!(session.cart().total_item_count(), 2);
    }

    #[tokio::test]
    async fn test_rupee_catalog_rejected_by_dollar_cart() {
        let ctx = test_context();
        let mut session = ShopSession::open(Currency::USD);
        let logger = session_logger(&session, &ctx)
            .with_min_level(abhiram_observability::LogLevel::Error);

        let result = execute(parse("add 2"), &mut session, &ctx, &logger).await;
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CommerceError>(),
            Some(CommerceError::CurrencyMismatch { .. })
        ));
        assert!(session.cart().is_empty());
    }
}
