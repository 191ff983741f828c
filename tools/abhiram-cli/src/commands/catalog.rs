//! Catalog browsing commands: listing, search and promotion links.

use abhiram_commerce::prelude::*;
use anyhow::{Context as _, Result};

use super::{ProductsArgs, PromoteArgs, SearchArgs};
use crate::context::Context;
use crate::output::discount_badge;

/// Run the products command.
pub async fn run_products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let filter = match (&args.category, &args.footer) {
        (_, Some(link)) => CategoryFilter::from_footer_link(link),
        (Some(category), None) => CategoryFilter::parse(category)?,
        (None, None) => CategoryFilter::All,
    };
    list_products(ctx, filter);
    Ok(())
}

/// Run the search command.
pub async fn run_search(args: SearchArgs, ctx: &Context) -> Result<()> {
    search(ctx, &args.term.join(" ")).context("Please enter a search term")
}

/// Run the promote command.
pub async fn run_promote(args: PromoteArgs, ctx: &Context) -> Result<()> {
    promote(ctx, &ProductId::new(args.product_id))
}

/// Print the products passing `filter`.
pub fn list_products(ctx: &Context, filter: CategoryFilter) {
    let products: Vec<&Product> = ctx.catalog.filter(filter).collect();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return;
    }

    ctx.output.header(&format!(
        "{} products ({})",
        ctx.config.store.name,
        filter
    ));
    print_products(ctx, &products);
}

/// Look a term up in the catalog and print the hits.
pub fn search(ctx: &Context, input: &str) -> Result<(), CommerceError> {
    let query = SearchQuery::parse(input)?;
    let hits: Vec<&Product> = ctx.catalog.search(&query).collect();

    if ctx.output.is_json() {
        ctx.output.json(&hits);
        return Ok(());
    }

    ctx.output
        .info(&format!("Searching for: \"{}\"", query.term()));
    if hits.is_empty() {
        ctx.output.warn("No products matched.");
    } else {
        print_products(ctx, &hits);
    }
    Ok(())
}

/// Print promotion details and link for a product.
pub fn promote(ctx: &Context, product_id: &ProductId) -> Result<()> {
    let product = ctx.catalog.require(product_id)?;
    let promotion = Promotion::for_product(product)?;

    if ctx.output.is_json() {
        ctx.output.json(&promotion);
        return Ok(());
    }

    ctx.output.header(&format!("Promote {}", product.name));
    ctx.output.kv("category", product.category.display_name());
    ctx.output.kv("price", &product.price_label());
    ctx.output.success(&format!(
        "You earn {} commission per sale!",
        promotion.commission.display()
    ));
    ctx.output.kv("link", &promotion.url);
    Ok(())
}

fn print_products(ctx: &Context, products: &[&Product]) {
    let widths = [4, 26, 12, 10, 10, 6];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "MRP", ""], &widths);
    for product in products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                product.name.as_str(),
                product.category.display_name(),
                product.price_label().as_str(),
                product.original_price.display_grouped().as_str(),
                discount_badge(product.discount_percent()).as_str(),
            ],
            &widths,
        );
    }
}
