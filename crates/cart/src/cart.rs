use serde::{Deserialize, Serialize};

use digitalden_catalog::{Product, ProductId};
use digitalden_core::{AggregateId, AggregateRoot, Money};

/// Cart identifier (one cart per session).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(pub AggregateId);

impl CartId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One (product, quantity) entry in the cart.
///
/// `quantity` is at least 1 while the line exists; reducing it to 0 removes
/// the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Discounted unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }

    /// Markdown recovered on this line; zero when not discounted.
    pub fn line_savings(&self) -> Money {
        self.product
            .original_price
            .saturating_sub(self.product.price)
            .times(self.quantity)
    }
}

/// Aggregate root: the session cart.
///
/// Lines are kept in insertion order, one per product id. Every operation is
/// synchronous and total: operations on absent lines are no-ops, never
/// errors. `version` increases by one per state-changing call (no-ops leave
/// it untouched).
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    /// A new, empty cart for a fresh session.
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Presence predicate for a product line.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.lines.iter().any(|line| line.product.id == product_id)
    }

    /// Add a product to the cart.
    ///
    /// A repeat add for a product already in the cart increments its
    /// quantity (the storefront's observable behavior; see DESIGN.md).
    pub fn add(&mut self, product: Product) {
        match self.line_mut(product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product,
                quantity: 1,
            }),
        }
        self.version += 1;
    }

    /// Remove a product's line unconditionally; no-op if absent.
    pub fn remove(&mut self, product_id: ProductId) {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != product_id);
        if self.lines.len() != before {
            self.version += 1;
        }
    }

    /// Set a line's quantity. Zero removes the line; absent ids are a no-op.
    ///
    /// Quantities are unsigned, so "never negative" holds by construction.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.line_mut(product_id) {
            if line.quantity != quantity {
                line.quantity = quantity;
                self.version += 1;
            }
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            self.lines.clear();
            self.version += 1;
        }
    }

    /// Sum of quantities across all lines (not the line count).
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of discounted price times quantity across all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total markdown across all lines ("You save" on the cart page).
    pub fn total_savings(&self) -> Money {
        self.lines.iter().map(CartLine::line_savings).sum()
    }

    /// Point-in-time view handed to the checkout step.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Serializable cart view: the line list plus derived totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total_items: u64,
    pub total_price: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use digitalden_catalog::CreatorId;

    fn test_cart() -> Cart {
        Cart::new(CartId::new(AggregateId::from_u128(0xCA57)))
    }

    fn product(n: u128, price_dollars: u64) -> Product {
        let created = DateTime::from_timestamp(n as i64 * 86_400, 0).unwrap();
        Product {
            id: ProductId::new(AggregateId::from_u128(n)),
            slug: format!("product-{n}"),
            title: format!("Product {n}"),
            description: String::new(),
            short_description: String::new(),
            category: "ui-kits".to_string(),
            tags: Vec::new(),
            price: Money::from_dollars(price_dollars),
            original_price: Money::from_dollars(price_dollars),
            rating: 4.5,
            review_count: 0,
            sales_count: 0,
            creator_id: CreatorId::new(AggregateId::from_u128(0x0200)),
            images: Vec::new(),
            preview_url: String::new(),
            featured: false,
            trending: false,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn new_cart_is_empty_with_zero_totals() {
        let cart = test_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::ZERO);
        assert_eq!(cart.version(), 0);
    }

    #[test]
    fn add_creates_a_line_with_quantity_one() {
        let mut cart = test_cart();
        let p = product(1, 10);
        cart.add(p.clone());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert!(cart.contains(p.id));
    }

    #[test]
    fn add_twice_increments_quantity() {
        let mut cart = test_cart();
        let p = product(1, 10);
        cart.add(p.clone());
        cart.add(p);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn totals_follow_quantities_and_discounted_prices() {
        // Add A (price 10) and B (price 20), then set A's quantity to 3:
        // 4 items, $50.00 total.
        let mut cart = test_cart();
        let a = product(1, 10);
        let b = product(2, 20);
        cart.add(a.clone());
        cart.add(b);
        cart.update_quantity(a.id, 3);

        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), Money::from_dollars(50));
    }

    #[test]
    fn total_price_uses_discounted_not_original_price() {
        let mut cart = test_cart();
        let mut p = product(1, 0);
        p.price = Money::from_cents(2900);
        p.original_price = Money::from_cents(3900);
        cart.add(p);
        cart.update_quantity(ProductId::new(AggregateId::from_u128(1)), 2);

        assert_eq!(cart.total_price(), Money::from_cents(5800));
        assert_eq!(cart.total_savings(), Money::from_cents(2000));
    }

    #[test]
    fn update_quantity_to_zero_removes_the_line() {
        let mut cart = test_cart();
        let p = product(1, 10);
        cart.add(p.clone());
        cart.update_quantity(p.id, 0);
        assert!(!cart.contains(p.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_on_absent_id_is_a_no_op() {
        let mut cart = test_cart();
        cart.add(product(1, 10));
        let before = cart.clone();
        cart.update_quantity(ProductId::new(AggregateId::from_u128(99)), 5);
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_then_contains_is_false() {
        let mut cart = test_cart();
        let p = product(1, 10);
        cart.add(p.clone());
        cart.remove(p.id);
        assert!(!cart.contains(p.id));
    }

    #[test]
    fn remove_on_absent_id_leaves_the_cart_unchanged() {
        let mut cart = test_cart();
        cart.add(product(1, 10));
        let before = cart.clone();
        cart.remove(ProductId::new(AggregateId::from_u128(99)));
        assert_eq!(cart, before);
        assert_eq!(cart.version(), before.version());
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = test_cart();
        cart.add(product(1, 10));
        cart.add(product(2, 20));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::ZERO);
    }

    #[test]
    fn clear_on_an_empty_cart_is_a_no_op() {
        let mut cart = test_cart();
        let before_version = cart.version();
        cart.clear();
        assert_eq!(cart.version(), before_version);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = test_cart();
        cart.add(product(3, 30));
        cart.add(product(1, 10));
        cart.add(product(2, 20));
        let slugs: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.product.slug.as_str())
            .collect();
        assert_eq!(slugs, ["product-3", "product-1", "product-2"]);
    }

    #[test]
    fn version_increments_once_per_state_change() {
        let mut cart = test_cart();
        let p = product(1, 10);
        cart.add(p.clone()); // 1
        cart.add(p.clone()); // 2
        cart.update_quantity(p.id, 5); // 3
        cart.update_quantity(p.id, 5); // unchanged quantity: no-op
        cart.remove(p.id); // 4
        cart.remove(p.id); // no-op
        assert_eq!(cart.version(), 4);
    }

    #[test]
    fn snapshot_carries_lines_and_totals() {
        let mut cart = test_cart();
        cart.add(product(1, 10));
        cart.add(product(2, 20));
        let snapshot = cart.snapshot();
        assert_eq!(snapshot.lines.len(), 2);
        assert_eq!(snapshot.total_items, 2);
        assert_eq!(snapshot.total_price, Money::from_dollars(30));

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: CartSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashMap;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u128),
            Remove(u128),
            Update(u128, u32),
            Clear,
        }

        fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
            prop::collection::vec(
                prop_oneof![
                    (1u128..6).prop_map(Op::Add),
                    (1u128..6).prop_map(Op::Remove),
                    ((1u128..6), 0u32..10).prop_map(|(n, q)| Op::Update(n, q)),
                    Just(Op::Clear),
                ],
                0..60,
            )
        }

        proptest! {
            /// Property: after any operation sequence, the cart agrees with a
            /// plain map model, and totals equal the sums over that model.
            #[test]
            fn cart_tracks_a_map_model(ops in arb_ops()) {
                let mut cart = test_cart();
                let mut model: HashMap<u128, u32> = HashMap::new();

                for op in ops {
                    match op {
                        Op::Add(n) => {
                            cart.add(product(n, n as u64));
                            *model.entry(n).or_insert(0) += 1;
                        }
                        Op::Remove(n) => {
                            cart.remove(ProductId::new(AggregateId::from_u128(n)));
                            model.remove(&n);
                        }
                        Op::Update(n, q) => {
                            cart.update_quantity(
                                ProductId::new(AggregateId::from_u128(n)),
                                q,
                            );
                            if model.contains_key(&n) {
                                if q == 0 {
                                    model.remove(&n);
                                } else {
                                    model.insert(n, q);
                                }
                            }
                        }
                        Op::Clear => {
                            cart.clear();
                            model.clear();
                        }
                    }
                }

                prop_assert_eq!(cart.lines().len(), model.len());
                let expected_items: u64 =
                    model.values().map(|&q| u64::from(q)).sum();
                prop_assert_eq!(cart.total_items(), expected_items);

                let expected_price: u64 = model
                    .iter()
                    .map(|(&n, &q)| n as u64 * 100 * u64::from(q))
                    .sum();
                prop_assert_eq!(cart.total_price(), Money::from_cents(expected_price));

                for line in cart.lines() {
                    prop_assert!(line.quantity >= 1);
                }
            }

            /// Property: the empty-cart signal is exactly `total_items() == 0`.
            #[test]
            fn empty_iff_zero_items(ops in arb_ops()) {
                let mut cart = test_cart();
                for op in ops {
                    match op {
                        Op::Add(n) => cart.add(product(n, 1)),
                        Op::Remove(n) => {
                            cart.remove(ProductId::new(AggregateId::from_u128(n)))
                        }
                        Op::Update(n, q) => cart.update_quantity(
                            ProductId::new(AggregateId::from_u128(n)),
                            q,
                        ),
                        Op::Clear => cart.clear(),
                    }
                }
                prop_assert_eq!(cart.is_empty(), cart.total_items() == 0);
            }
        }
    }
}
