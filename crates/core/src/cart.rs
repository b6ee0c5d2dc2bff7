//! In-memory shopping cart.
//!
//! Lines are keyed by product name: adding a name that is already in the
//! cart bumps its quantity instead of creating a second line. The cart lives
//! only as long as the page.

use serde::Serialize;

use crate::types::Price;

/// Message shown in place of the line list when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// One product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    name: String,
    unit_price: Price,
    quantity: u32,
}

impl CartLine {
    /// Product name, unique within the cart.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price recorded when the product was first added.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Number of units, always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// The cart's lines in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `name`, returning the line's new quantity.
    ///
    /// A repeated add keeps the price recorded by the first one.
    pub fn add_item(&mut self, name: impl Into<String>, unit_price: Price) -> u32 {
        let name = name.into();
        if let Some(line) = self.lines.iter_mut().find(|line| line.name == name) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(name = %line.name, quantity = line.quantity, "cart line incremented");
            return line.quantity;
        }

        tracing::debug!(name = %name, price = %unit_price, "cart line added");
        self.lines.push(CartLine {
            name,
            unit_price,
            quantity: 1,
        });
        1
    }

    /// Remove the whole line for `name`, whatever its quantity.
    pub fn remove_item(&mut self, name: &str) -> Option<CartLine> {
        let pos = self.lines.iter().position(|line| line.name == name)?;
        let removed = self.lines.remove(pos);
        tracing::debug!(name = %removed.name, "cart line removed");
        Some(removed)
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities (the badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Everything the cart panel displays.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            item_count: self.item_count(),
            total: self.total(),
            lines: self.lines.iter().map(CartLineView::from).collect(),
        }
    }
}

/// Display data for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    /// Product name (also the removal key).
    pub name: String,
    /// `"$10.00 x 2"`.
    pub detail: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name.clone(),
            detail: format!("{} x {}", line.unit_price, line.quantity),
        }
    }
}

/// Display data for the cart panel and badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Badge count.
    pub item_count: u32,
    /// Grand total.
    pub total: Price,
    /// One view per line, in cart order.
    pub lines: Vec<CartLineView>,
}

impl CartSummary {
    /// Badge text.
    #[must_use]
    pub fn badge(&self) -> String {
        self.item_count.to_string()
    }

    /// Total text, e.g. `"$25.00"`.
    #[must_use]
    pub fn total_label(&self) -> String {
        self.total.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_duplicate_add_merges() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item("Lash Serum", Price::from_cents(3200)), 1);
        assert_eq!(cart.add_item("Lash Serum", Price::from_cents(3200)), 2);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity(), 2);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::from_cents(1000));
        cart.add_item("A", Price::from_cents(1000));
        cart.add_item("B", Price::from_cents(500));

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total().to_string(), "$25.00");
    }

    #[test]
    fn test_remove_then_add_starts_fresh() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::from_cents(1000));
        cart.add_item("A", Price::from_cents(1000));

        let removed = cart.remove_item("A").unwrap();
        assert_eq!(removed.quantity(), 2);
        assert!(cart.is_empty());

        assert_eq!(cart.add_item("A", Price::from_cents(1000)), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_unknown_is_none() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::from_cents(1000));
        assert!(cart.remove_item("B").is_none());
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_repeat_add_keeps_first_price() {
        let mut cart = Cart::new();
        cart.add_item("A", Price::from_cents(1000));
        cart.add_item("A", Price::from_cents(9900));
        assert_eq!(cart.total().to_string(), "$20.00");
    }

    #[test]
    fn test_summary_views() {
        let mut cart = Cart::new();
        cart.add_item("Brow Gel", Price::from_cents(1800));
        cart.add_item("Brow Gel", Price::from_cents(1800));
        cart.add_item("Lash Cleanser", Price::ZERO);

        let summary = cart.summary();
        assert_eq!(summary.badge(), "3");
        assert_eq!(summary.total_label(), "$36.00");
        assert_eq!(summary.lines[0].detail, "$18.00 x 2");
        assert_eq!(summary.lines[1].name, "Lash Cleanser");
        assert_eq!(summary.lines[1].detail, "$0.00 x 1");
    }

    #[test]
    fn test_empty_summary() {
        let summary = Cart::new().summary();
        assert_eq!(summary.badge(), "0");
        assert_eq!(summary.total_label(), "$0.00");
        assert!(summary.lines.is_empty());
    }

    proptest! {
        #[test]
        fn prop_count_is_sum_of_quantities(
            adds in proptest::collection::vec((0usize..5, 0u32..10_000), 0..60)
        ) {
            let mut cart = Cart::new();
            for (product, cents) in &adds {
                cart.add_item(format!("product-{product}"), Price::from_cents(*cents));
            }

            let per_line: u32 = cart.lines().iter().map(CartLine::quantity).sum();
            prop_assert_eq!(cart.item_count(), per_line);
            prop_assert_eq!(cart.item_count() as usize, adds.len());

            let mut names: Vec<&str> = cart.lines().iter().map(CartLine::name).collect();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), cart.lines().len());
        }

        #[test]
        fn prop_total_is_sum_of_line_totals(
            adds in proptest::collection::vec((0usize..4, 0u32..10_000), 0..40),
            removed in 0usize..4
        ) {
            let mut cart = Cart::new();
            for (product, cents) in &adds {
                cart.add_item(format!("product-{product}"), Price::from_cents(*cents));
            }
            let gone = format!("product-{removed}");
            cart.remove_item(&gone);

            let expected: Price = cart
                .lines()
                .iter()
                .map(|line| line.unit_price().times(line.quantity()))
                .sum();
            prop_assert_eq!(cart.total(), expected);
            prop_assert!(cart.lines().iter().all(|line| line.name() != gone));
        }
    }
}
