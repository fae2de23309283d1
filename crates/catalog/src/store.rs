use std::collections::HashMap;

use digitalden_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::creator::{Creator, CreatorId};
use crate::product::{Product, ProductId};
use crate::review::Review;

/// The read-only catalog: products, creators, categories, reviews.
///
/// Built once at startup and never mutated. Construction validates what the
/// rest of the system takes for granted: unique ids/slugs/handles, no
/// dangling creator or review references, and `price <= original_price`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    creators: Vec<Creator>,
    categories: Vec<Category>,
    reviews: Vec<Review>,
    products_by_id: HashMap<ProductId, usize>,
    products_by_slug: HashMap<String, usize>,
    creators_by_id: HashMap<CreatorId, usize>,
    creators_by_handle: HashMap<String, usize>,
    categories_by_slug: HashMap<String, usize>,
    reviews_by_product: HashMap<ProductId, Vec<usize>>,
}

impl Catalog {
    pub fn new(
        products: Vec<Product>,
        creators: Vec<Creator>,
        categories: Vec<Category>,
        reviews: Vec<Review>,
    ) -> DomainResult<Self> {
        let mut creators_by_id = HashMap::new();
        let mut creators_by_handle = HashMap::new();
        for (idx, creator) in creators.iter().enumerate() {
            if creators_by_id.insert(creator.id, idx).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate creator id: {}",
                    creator.id
                )));
            }
            if creators_by_handle.insert(creator.handle.clone(), idx).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate creator handle: {}",
                    creator.handle
                )));
            }
        }

        let mut categories_by_slug = HashMap::new();
        for (idx, category) in categories.iter().enumerate() {
            if categories_by_slug.insert(category.slug.clone(), idx).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate category slug: {}",
                    category.slug
                )));
            }
        }

        let mut products_by_id = HashMap::new();
        let mut products_by_slug = HashMap::new();
        for (idx, product) in products.iter().enumerate() {
            if products_by_id.insert(product.id, idx).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
            if products_by_slug.insert(product.slug.clone(), idx).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate product slug: {}",
                    product.slug
                )));
            }
            if !creators_by_id.contains_key(&product.creator_id) {
                return Err(DomainError::validation(format!(
                    "product {} references unknown creator {}",
                    product.slug, product.creator_id
                )));
            }
            if product.original_price < product.price {
                return Err(DomainError::invariant(format!(
                    "product {} has original price below current price",
                    product.slug
                )));
            }
        }

        let mut reviews_by_product: HashMap<ProductId, Vec<usize>> = HashMap::new();
        for (idx, review) in reviews.iter().enumerate() {
            if !products_by_id.contains_key(&review.product_id) {
                return Err(DomainError::validation(format!(
                    "review {} references unknown product {}",
                    review.id, review.product_id
                )));
            }
            if !(1..=5).contains(&review.rating) {
                return Err(DomainError::validation(format!(
                    "review {} has out-of-range rating {}",
                    review.id, review.rating
                )));
            }
            reviews_by_product
                .entry(review.product_id)
                .or_default()
                .push(idx);
        }

        tracing::debug!(
            products = products.len(),
            creators = creators.len(),
            categories = categories.len(),
            reviews = reviews.len(),
            "catalog loaded"
        );

        Ok(Self {
            products,
            creators,
            categories,
            reviews,
            products_by_id,
            products_by_slug,
            creators_by_id,
            creators_by_handle,
            categories_by_slug,
            reviews_by_product,
        })
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products_by_id.get(&id).map(|&idx| &self.products[idx])
    }

    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products_by_slug
            .get(slug)
            .map(|&idx| &self.products[idx])
    }

    pub fn creators(&self) -> &[Creator] {
        &self.creators
    }

    pub fn creator(&self, id: CreatorId) -> Option<&Creator> {
        self.creators_by_id.get(&id).map(|&idx| &self.creators[idx])
    }

    pub fn creator_by_handle(&self, handle: &str) -> Option<&Creator> {
        self.creators_by_handle
            .get(handle)
            .map(|&idx| &self.creators[idx])
    }

    /// Products owned by a creator, in catalog order.
    pub fn products_by_creator(&self, id: CreatorId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.creator_id == id)
            .collect()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories_by_slug
            .get(slug)
            .map(|&idx| &self.categories[idx])
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Reviews for a product, in catalog order.
    pub fn reviews_for(&self, product_id: ProductId) -> Vec<&Review> {
        self.reviews_by_product
            .get(&product_id)
            .map(|indexes| indexes.iter().map(|&idx| &self.reviews[idx]).collect())
            .unwrap_or_default()
    }
}
