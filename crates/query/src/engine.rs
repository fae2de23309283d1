use digitalden_catalog::Product;

use crate::criteria::{FilterCriteria, SortKey};

/// Keep only the products matching every set criterion.
///
/// Returns a new vector; the input is never mutated.
pub fn filter(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

/// Order products by the given key.
///
/// `None` (an unrecognized key upstream) returns the input order unchanged.
/// All orderings are stable — ties keep their input order — which pagination
/// relies on for determinism.
pub fn sort(products: &[Product], key: Option<SortKey>) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        None => {}
        Some(SortKey::Popular) => sorted.sort_by(|a, b| b.sales_count.cmp(&a.sales_count)),
        Some(SortKey::Newest) => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        Some(SortKey::PriceLow) => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        Some(SortKey::PriceHigh) => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        Some(SortKey::Rating) => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    sorted
}

/// 1-indexed page slice; out-of-range pages (including page 0) are empty.
pub fn paginate(products: &[Product], page_size: usize, page: usize) -> Vec<Product> {
    if page_size == 0 || page == 0 {
        return Vec::new();
    }
    products
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// Products sharing a category or at least one tag with `product`, excluding
/// the product itself, best-rated first.
pub fn related_products(product: &Product, all: &[Product], limit: usize) -> Vec<Product> {
    let mut related: Vec<Product> = all
        .iter()
        .filter(|candidate| {
            candidate.id != product.id
                && (candidate.category == product.category
                    || candidate.tags.iter().any(|tag| product.tags.contains(tag)))
        })
        .cloned()
        .collect();
    related.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    related.truncate(limit);
    related
}

/// Trending-flagged products, best-selling first.
pub fn trending_products(products: &[Product], limit: usize) -> Vec<Product> {
    let mut trending: Vec<Product> = products.iter().filter(|p| p.trending).cloned().collect();
    trending.sort_by(|a, b| b.sales_count.cmp(&a.sales_count));
    trending.truncate(limit);
    trending
}

/// Featured-flagged products, best-rated first.
pub fn featured_products(products: &[Product], limit: usize) -> Vec<Product> {
    let mut featured: Vec<Product> = products.iter().filter(|p| p.featured).cloned().collect();
    featured.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    featured.truncate(limit);
    featured
}
