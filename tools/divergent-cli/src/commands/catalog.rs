//! Catalog browsing commands.

use anyhow::Result;
use divergent_commerce::catalog::{CatalogProvider, Product};
use divergent_commerce::ExhibitionId;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::status_badge;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::List { exhibition } => list_products(exhibition.as_deref(), ctx),
        CatalogCommand::Show { product } => show_product(&product, ctx),
        CatalogCommand::Exhibitions => list_exhibitions(ctx),
    }
}

fn list_products(exhibition: Option<&str>, ctx: &Context) -> Result<()> {
    let products: Vec<&Product> = match exhibition {
        Some(id) => ctx.catalog.products_in(&ExhibitionId::new(id)),
        None => ctx.catalog.products().iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Collection");
    if products.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    let widths = [20, 22, 10, 8];
    ctx.output.table_row(&["SLUG", "NAME", "TYPE", "PRICE"], &widths);
    for product in products {
        let price = product.price.display();
        ctx.output.table_row(
            &[
                product.slug.as_str(),
                product.name.as_str(),
                product.product_type.as_str(),
                price.as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}

fn show_product(query: &str, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.resolve(query)?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.line(&product.description);
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv("sizes", &product.available_sizes().join(" / "));
    ctx.output.kv("material", &product.details.material);
    ctx.output.kv("fit", &product.details.fit);
    ctx.output.kv("weight", &product.details.weight);
    ctx.output.kv("care", &product.details.care);
    if !product.tags.is_empty() {
        ctx.output.kv("tags", &product.tags.join(", "));
    }

    Ok(())
}

fn list_exhibitions(ctx: &Context) -> Result<()> {
    let exhibitions = ctx.catalog.exhibitions();

    if ctx.output.is_json() {
        ctx.output.json(&exhibitions);
        return Ok(());
    }

    ctx.output.header("Exhibitions");
    for exhibition in exhibitions {
        ctx.output.list_item(&format!(
            "{} [{}] {}",
            exhibition.title,
            status_badge(exhibition.status.as_str()),
            exhibition.year
        ));
        ctx.output.kv("meaning", &exhibition.meaning);
        ctx.output.kv("edition", &exhibition.edition);
        ctx.output.kv(
            "pieces",
            &ctx.catalog.products_in(&exhibition.id).len().to_string(),
        );
    }

    Ok(())
}
