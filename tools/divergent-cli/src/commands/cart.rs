//! Cart commands.
//!
//! Each invocation is one storefront session: the cart is hydrated from the
//! storage document, mutated, and written through before the process exits.

use anyhow::Result;
use dialoguer::{Confirm, Select};
use divergent_cache::KeyValueStore;
use divergent_commerce::cart::{CartLineItem, CartStore};
use divergent_commerce::catalog::{CatalogProvider, Product};
use divergent_commerce::checkout::CheckoutSummary;
use divergent_commerce::ProductId;
use serde::Serialize;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    match args.command {
        CartCommand::Show => {
            render_cart(&cart, ctx);
            Ok(())
        }
        CartCommand::Add { product, size } => add(&mut cart, &product, size.as_deref(), ctx),
        CartCommand::Remove { product, size } => remove(&mut cart, &product, &size, ctx),
        CartCommand::Update {
            product,
            size,
            quantity,
        } => update(&mut cart, &product, &size, quantity, ctx),
        CartCommand::Clear { yes } => clear(&mut cart, yes, ctx),
        CartCommand::Checkout => checkout(&cart, ctx),
    }
}

fn add<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    query: &str,
    size: Option<&str>,
    ctx: &Context,
) -> Result<()> {
    let product = ctx.catalog.resolve(query)?;
    let size = match size {
        Some(size) => product.require_size(size)?,
        None => pick_size(product, ctx)?,
    };

    cart.add_item(product, size);
    ctx.output
        .success(&format!("Added {} ({}) to your cart", product.name, size));

    // Adding opens the drawer.
    if cart.is_open() {
        render_cart(cart, ctx);
    }
    Ok(())
}

fn pick_size(product: &Product, ctx: &Context) -> Result<&'static str> {
    let sizes = product.available_sizes();
    if sizes.len() == 1 || !ctx.output.is_interactive() {
        return Ok(product.default_size());
    }

    let default = sizes
        .iter()
        .position(|s| *s == product.default_size())
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Size")
        .items(&sizes)
        .default(default)
        .interact()?;

    Ok(sizes.get(selection).copied().unwrap_or(product.default_size()))
}

fn remove<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    query: &str,
    size: &str,
    ctx: &Context,
) -> Result<()> {
    let (product_id, size) = locate_line(cart, query, size, ctx);
    let present = cart.state().item(&product_id, &size).is_some();

    cart.remove_item(&product_id, &size);

    if present {
        ctx.output
            .success(&format!("Removed {} ({}) from your cart", product_id, size));
    } else {
        ctx.output
            .info(&format!("{} ({}) was not in your cart", product_id, size));
    }
    render_cart(cart, ctx);
    Ok(())
}

fn update<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    query: &str,
    size: &str,
    quantity: i64,
    ctx: &Context,
) -> Result<()> {
    let (product_id, size) = locate_line(cart, query, size, ctx);

    cart.update_quantity(&product_id, &size, quantity);

    match cart.state().item(&product_id, &size) {
        Some(item) => ctx.output.success(&format!(
            "{} ({}) quantity is now {}",
            item.product.name,
            size,
            item.quantity()
        )),
        None => ctx
            .output
            .info(&format!("{} ({}) is not in your cart", product_id, size)),
    }
    render_cart(cart, ctx);
    Ok(())
}

fn clear<S: KeyValueStore>(cart: &mut CartStore<S>, yes: bool, ctx: &Context) -> Result<()> {
    if cart.items().is_empty() {
        ctx.output.info("Your cart is already empty.");
        return Ok(());
    }

    if !yes && ctx.output.is_interactive() {
        let confirmed = Confirm::new()
            .with_prompt("Remove everything from your cart?")
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    cart.clear();
    ctx.output.success("Cart cleared");
    Ok(())
}

fn checkout<S: KeyValueStore>(cart: &CartStore<S>, ctx: &Context) -> Result<()> {
    let policy = ctx.config.checkout.shipping_policy();
    let summary = CheckoutSummary::from_cart(cart.state(), &policy);

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Order Summary");
    if cart.items().is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    for item in cart.items() {
        ctx.output.list_item(&line_label(item));
    }
    ctx.output.kv("Subtotal", &summary.subtotal.display());
    ctx.output.kv("Shipping", &summary.shipping_display());
    if let Some(remaining) = policy.remaining_for_free(summary.subtotal) {
        ctx.output.kv("Free shipping in", &remaining.display());
    }
    ctx.output.kv("Total", &summary.total.display());
    ctx.output
        .info("Payment is not taken here; this is a preview of your order.");
    Ok(())
}

/// Find the cart line a user means by `query` and `size`.
///
/// Cart lines are snapshots, so lines are matched first (by slug or ID) and
/// the catalog is consulted only when no line matches. Sizes match
/// case-insensitively against what is already in the cart.
fn locate_line<S: KeyValueStore>(
    cart: &CartStore<S>,
    query: &str,
    size: &str,
    ctx: &Context,
) -> (ProductId, String) {
    let in_cart = cart
        .items()
        .iter()
        .filter(|i| i.product.slug == query || i.product.id == *query)
        .find(|i| i.size.eq_ignore_ascii_case(size));
    if let Some(item) = in_cart {
        return (item.product.id.clone(), item.size.clone());
    }

    match ctx.catalog.resolve(query) {
        Ok(product) => {
            let size = product.canonical_size(size).unwrap_or(size);
            (product.id.clone(), size.to_string())
        }
        Err(_) => (ProductId::new(query), size.to_string()),
    }
}

fn line_label(item: &CartLineItem) -> String {
    format!(
        "{} / {} x{} {}",
        item.product.name,
        item.size,
        item.quantity(),
        item.line_total().display()
    )
}

#[derive(Serialize)]
struct CartView<'a> {
    items: &'a [CartLineItem],
    is_open: bool,
    item_count: u64,
    subtotal: divergent_commerce::Price,
}

fn render_cart<S: KeyValueStore>(cart: &CartStore<S>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&CartView {
            items: cart.items(),
            is_open: cart.is_open(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
        });
        return;
    }

    ctx.output.header("Your Cart");
    if cart.items().is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }

    let widths = [22, 9, 4, 8];
    ctx.output.table_row(&["ITEM", "SIZE", "QTY", "TOTAL"], &widths);
    for item in cart.items() {
        let quantity = item.quantity().to_string();
        let total = item.line_total().display();
        ctx.output.table_row(
            &[
                item.product.name.as_str(),
                item.size.as_str(),
                quantity.as_str(),
                total.as_str(),
            ],
            &widths,
        );
    }
    ctx.output.kv("Items", &cart.item_count().to_string());
    ctx.output.kv("Subtotal", &cart.subtotal().display());
    if ctx.output.is_verbose() {
        ctx.output
            .kv("Stored in", &ctx.storage_path().display().to_string());
    }
}
