//! Scripted storefront session.
//!
//! Stands in for the (out-of-scope) presentation layer: loads the seed
//! catalog, browses it through the query engine, fills a cart, and hands the
//! snapshot to where a checkout step would pick it up.

use anyhow::{Context, Result};

use digitalden_cart::{Cart, CartId};
use digitalden_catalog::seed;
use digitalden_core::AggregateId;
use digitalden_query::{
    featured_products, filter, paginate, related_products, sort, trending_products,
    FilterCriteria, SortKey,
};

fn main() -> Result<()> {
    digitalden_observability::init();

    let catalog = seed::catalog();
    tracing::info!(
        products = catalog.products().len(),
        creators = catalog.creators().len(),
        "storefront ready"
    );

    // Home page: featured + trending rails.
    for product in featured_products(catalog.products(), 3) {
        tracing::info!(slug = %product.slug, rating = product.rating, "featured");
    }
    for product in trending_products(catalog.products(), 6) {
        tracing::info!(slug = %product.slug, sales = product.sales_count, "trending");
    }

    // Products page: search "figma", best sellers first, first page of 12.
    let criteria = FilterCriteria {
        search_query: Some("figma".to_string()),
        ..Default::default()
    };
    let results = paginate(
        &sort(&filter(catalog.products(), &criteria), SortKey::parse("popular")),
        12,
        1,
    );
    tracing::info!(hits = results.len(), "search results for 'figma'");

    // Product detail page for the top hit, with its related rail.
    let top = results.first().context("seed catalog has no figma products")?;
    let creator = catalog
        .creator(top.creator_id)
        .context("product creator missing from catalog")?;
    tracing::info!(
        slug = %top.slug,
        price = %top.price,
        discount = top.discount_percent(),
        creator = %creator.handle,
        reviews = catalog.reviews_for(top.id).len(),
        "viewing product"
    );
    for product in related_products(top, catalog.products(), 4) {
        tracing::info!(slug = %product.slug, "related");
    }

    // Cart session: two products, bump the first to three copies.
    let mut cart = Cart::new(CartId::new(AggregateId::new()));
    cart.add(top.clone());
    if let Some(second) = results.get(1) {
        cart.add(second.clone());
    }
    cart.update_quantity(top.id, 3);
    tracing::info!(
        items = cart.total_items(),
        total = %cart.total_price(),
        savings = %cart.total_savings(),
        "cart updated"
    );

    // Hand-off the checkout step would consume.
    let snapshot = cart.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    // Checkout completion clears the session cart.
    cart.clear();
    tracing::info!(items = cart.total_items(), "cart cleared after checkout");

    Ok(())
}
