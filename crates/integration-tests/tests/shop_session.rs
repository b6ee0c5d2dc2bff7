//! Integration tests for the shop page's cart.
//!
//! Product cards are read the way the page reads them (name text plus a
//! free-form price label) and the cart panel is checked through its
//! summary.

#![allow(clippy::indexing_slicing)]

use mb_studio_core::Price;
use mb_studio_core::cart::{Cart, EMPTY_CART_MESSAGE};
use mb_studio_core::filter::CategoryFilter;
use proptest::prelude::*;

/// `(name, price label, data-category)` as they appear on product cards.
const PRODUCTS: &[(&str, &str, &str)] = &[
    ("Lash Serum", "$32.00", "aftercare"),
    ("Brow Gel", "From $18.5 each", "brows"),
    ("Gift Card", "Call for pricing", "gifts"),
    ("Lash Cleanser", "$24", "aftercare"),
];

fn add(cart: &mut Cart, index: usize) -> u32 {
    let (name, label, _) = PRODUCTS[index];
    cart.add_item(name, Price::parse_label(label))
}

// =============================================================================
// Cart Panel Tests
// =============================================================================

#[test]
fn test_browse_add_remove_session() {
    let mut cart = Cart::new();
    assert!(cart.summary().lines.is_empty(), "{EMPTY_CART_MESSAGE}");

    assert_eq!(add(&mut cart, 0), 1);
    assert_eq!(add(&mut cart, 1), 1);
    assert_eq!(add(&mut cart, 0), 2);
    assert_eq!(add(&mut cart, 2), 1);

    let summary = cart.summary();
    assert_eq!(summary.badge(), "4");
    assert_eq!(summary.total_label(), "$82.50");
    let details: Vec<_> = summary.lines.iter().map(|l| l.detail.as_str()).collect();
    assert_eq!(details, ["$32.00 x 2", "$18.50 x 1", "$0.00 x 1"]);

    cart.remove_item("Lash Serum");
    let summary = cart.summary();
    assert_eq!(summary.badge(), "2");
    assert_eq!(summary.total_label(), "$18.50");
    assert_eq!(summary.lines[0].name, "Brow Gel");

    cart.remove_item("Brow Gel");
    cart.remove_item("Gift Card");
    let summary = cart.summary();
    assert!(summary.lines.is_empty());
    assert_eq!(summary.badge(), "0");
    assert_eq!(summary.total_label(), "$0.00");
}

#[test]
fn test_grouped_price_label_reads_leading_digits() {
    // "$1,200" stops at the comma, like the page's price pattern does.
    assert_eq!(Price::parse_label("$1,200").to_string(), "$1.00");
}

#[test]
fn test_category_filter_over_product_cards() {
    let categories = PRODUCTS.iter().map(|&(_, _, category)| Some(category));

    let aftercare = CategoryFilter::parse("aftercare").visibility(categories.clone());
    assert_eq!(aftercare, [true, false, false, true]);

    let all = CategoryFilter::parse("all").visibility(categories);
    assert!(all.iter().all(|&shown| shown));
}

// =============================================================================
// Property Tests
// =============================================================================

#[derive(Debug, Clone)]
enum Action {
    Add(usize),
    Remove(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0..PRODUCTS.len()).prop_map(Action::Add),
        1 => (0..PRODUCTS.len()).prop_map(Action::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_badge_and_total_track_every_action(actions in proptest::collection::vec(action(), 0..80)) {
        let mut cart = Cart::new();
        let mut quantities = [0u32; 4];

        for action in &actions {
            match *action {
                Action::Add(i) => {
                    let quantity = add(&mut cart, i);
                    quantities[i] += 1;
                    prop_assert_eq!(quantity, quantities[i]);
                }
                Action::Remove(i) => {
                    let removed = cart.remove_item(PRODUCTS[i].0);
                    prop_assert_eq!(removed.is_some(), quantities[i] > 0);
                    quantities[i] = 0;
                }
            }

            let expected_total: Price = PRODUCTS
                .iter()
                .zip(quantities)
                .map(|(&(_, label, _), quantity)| Price::parse_label(label).times(quantity))
                .sum();
            let summary = cart.summary();
            prop_assert_eq!(summary.item_count, quantities.iter().sum::<u32>());
            prop_assert_eq!(summary.total, expected_total);
            prop_assert_eq!(summary.lines.len(), quantities.iter().filter(|&&q| q > 0).count());
        }
    }
}
