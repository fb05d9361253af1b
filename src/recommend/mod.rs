//! Complementary suggestions for the cart.
//!
//! The most expensive line in the cart is the anchor. Its category picks a candidate
//! pool from [`ComplementRules`]; candidates already in the cart or archived are dropped
//! and the rest are ranked by price, highest first.

mod rules;

pub use rules::*;

use std::cmp::Ordering;
use std::collections::HashSet;
use crate::domain::{CartItem, Product};

/// Upper bound on suggestions shown next to the cart.
pub const MAX_SUGGESTIONS: usize = 3;

/// Suggestions using the café's default pairing table.
pub fn recommend<'a>(cart: &[CartItem], catalog: &'a [Product]) -> Vec<&'a Product> {
    recommend_with(&ComplementRules::cafe_defaults(), cart, catalog)
}

/// Suggests up to [`MAX_SUGGESTIONS`] products complementing the priciest cart line.
///
/// Returns an empty list when the cart is empty or its anchor SKU is not in the catalog.
pub fn recommend_with<'a>(
    rules: &ComplementRules,
    cart: &[CartItem],
    catalog: &'a [Product],
) -> Vec<&'a Product> {
    let Some(anchor) = anchor_item(cart) else {
        return Vec::new();
    };
    let Some(anchor_product) = catalog.iter().find(|p| p.sku == anchor.sku) else {
        return Vec::new();
    };

    let in_cart: HashSet<&str> = cart.iter().map(|it| it.sku.as_str()).collect();
    let pool = rules.pool_for(&anchor_product.category);

    let mut suggestions: Vec<&Product> = catalog
        .iter()
        .filter(|p| match pool {
            CandidatePool::Categories(targets) => targets.contains(&p.category),
            CandidatePool::ActiveCatalog => p.active,
        })
        .filter(|p| p.active && !in_cart.contains(p.sku.as_str()))
        .collect();

    // Stable: equal prices keep catalog order.
    suggestions.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Priciest line; the first one wins a tie.
fn anchor_item(cart: &[CartItem]) -> Option<&CartItem> {
    cart.iter().fold(None, |best: Option<&CartItem>, item| match best {
        Some(current) if item.price <= current.price => Some(current),
        _ => Some(item),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category;
    use proptest::prelude::*;

    fn line(sku: &str, price: f64) -> CartItem {
        CartItem { sku: sku.to_string(), name: sku.to_string(), price, qty: 1 }
    }

    fn skus<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.sku.as_str()).collect()
    }

    fn demo_catalog() -> Vec<Product> {
        vec![
            Product::new("CMB-01", "Golden Morning Combo", 8.50, category::COMBO),
            Product::new("CMB-02", "Executive Lunch", 12.90, category::COMBO),
            Product::new("DRK-01", "Midnight Cold Brew", 4.50, category::COFFEE),
            Product::new("DRK-02", "Matcha Zen Latte", 5.20, category::TEA),
            Product::new("SNK-01", "Truffle Fries", 6.00, category::SNACK),
            Product::new("SNK-02", "Artisan Scone", 3.50, category::SNACK),
            Product::new("DRK-03", "Sparkling Hibiscus", 4.00, category::DRINK),
        ]
    }

    #[test]
    fn test_empty_cart_has_no_suggestions() {
        assert!(recommend(&[], &demo_catalog()).is_empty());
    }

    #[test]
    fn test_unknown_anchor_has_no_suggestions() {
        let cart = vec![line("GONE-01", 99.0), line("DRK-01", 4.50)];
        assert!(recommend(&cart, &demo_catalog()).is_empty());
    }

    #[test]
    fn test_combo_anchor_suggests_drinks_and_coffee() {
        let mut catalog = demo_catalog();
        catalog.iter_mut().find(|p| p.sku == "DRK-03").unwrap().active = false;

        let cart = vec![line("CMB-01", 8.50)];
        let result = recommend(&cart, &catalog);

        // Tea is not paired with combos and the only DRINK is archived.
        assert_eq!(skus(&result), vec!["DRK-01"]);
    }

    #[test]
    fn test_combo_anchor_with_active_drink() {
        let cart = vec![line("CMB-01", 8.50)];
        assert_eq!(skus(&recommend(&cart, &demo_catalog())), vec!["DRK-01", "DRK-03"]);
    }

    #[test]
    fn test_coffee_anchor_suggests_snacks_by_price() {
        let cart = vec![line("DRK-01", 4.50)];
        assert_eq!(skus(&recommend(&cart, &demo_catalog())), vec!["SNK-01", "SNK-02"]);
    }

    #[test]
    fn test_snack_anchor_never_suggests_itself_or_other_snacks() {
        let catalog = vec![
            Product::new("SNK-01", "Truffle Fries", 6.00, category::SNACK),
            Product::new("DRK-02", "Matcha Zen Latte", 5.20, category::TEA),
            Product::new("DRK-03", "Sparkling Hibiscus", 4.00, category::DRINK),
            Product::new("DRK-01", "Midnight Cold Brew", 4.50, category::COFFEE),
        ];
        let cart = vec![line("SNK-01", 6.00), line("DRK-03", 4.00)];

        assert_eq!(skus(&recommend(&cart, &catalog)), vec!["DRK-02"]);
    }

    #[test]
    fn test_unmapped_category_falls_back_to_active_catalog() {
        let mut catalog = demo_catalog();
        catalog.push(Product::new("DST-01", "Amber Citrus Tart", 6.50, "DESSERT"));
        catalog.iter_mut().find(|p| p.sku == "CMB-02").unwrap().active = false;

        let cart = vec![line("DST-01", 6.50)];
        // CMB-02 is the priciest product but archived.
        assert_eq!(skus(&recommend(&cart, &catalog)), vec!["CMB-01", "SNK-01", "DRK-02"]);
    }

    #[test]
    fn test_anchor_tie_picks_first_line() {
        let catalog = vec![
            Product::new("DRK-01", "Midnight Cold Brew", 5.00, category::COFFEE),
            Product::new("SNK-01", "Truffle Fries", 5.00, category::SNACK),
            Product::new("SNK-02", "Artisan Scone", 3.50, category::SNACK),
            Product::new("DRK-03", "Sparkling Hibiscus", 4.00, category::DRINK),
        ];

        let coffee_first = vec![line("DRK-01", 5.00), line("SNK-01", 5.00)];
        assert_eq!(skus(&recommend(&coffee_first, &catalog)), vec!["SNK-02"]);

        let snack_first = vec![line("SNK-01", 5.00), line("DRK-01", 5.00)];
        assert_eq!(skus(&recommend(&snack_first, &catalog)), vec!["DRK-03"]);
    }

    #[test]
    fn test_equal_prices_keep_catalog_order() {
        let catalog = vec![
            Product::new("DRK-01", "Cold Brew", 4.50, category::COFFEE),
            Product::new("SNK-B", "Brownie", 3.00, category::SNACK),
            Product::new("SNK-A", "Almond Biscotti", 3.00, category::SNACK),
            Product::new("SNK-C", "Cookie", 3.00, category::SNACK),
            Product::new("SNK-D", "Donut", 3.00, category::SNACK),
        ];
        let cart = vec![line("DRK-01", 4.50)];
        assert_eq!(skus(&recommend(&cart, &catalog)), vec!["SNK-B", "SNK-A", "SNK-C"]);
    }

    #[test]
    fn test_custom_rules_drive_the_pool() {
        let rules = ComplementRules::empty().with_rule(category::COFFEE, &[category::TEA]);
        let cart = vec![line("DRK-01", 4.50)];
        assert_eq!(skus(&recommend_with(&rules, &cart, &demo_catalog())), vec!["DRK-02"]);
    }

    #[test]
    fn test_returns_references_into_the_catalog() {
        let catalog = demo_catalog();
        let cart = vec![line("DRK-01", 4.50)];
        let result = recommend(&cart, &catalog);
        assert!(std::ptr::eq(result[0], &catalog[4]));
    }

    const CATEGORIES: [&str; 6] = ["COMBO", "DRINK", "COFFEE", "TEA", "SNACK", "DESSERT"];

    fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec((0usize..CATEGORIES.len(), 0u32..2000, any::<bool>()), 0..25)
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (cat, cents, active))| Product {
                        active,
                        ..Product::new(format!("SKU-{:02}", i), format!("Item {}", i), cents as f64 / 100.0, CATEGORIES[cat])
                    })
                    .collect()
            })
    }

    fn cart_strategy(catalog: Vec<Product>) -> impl Strategy<Value = (Vec<Product>, Vec<CartItem>)> {
        let len = catalog.len();
        prop::collection::vec((0..len.max(1), 1u32..4), 0..5).prop_map(move |picks| {
            let mut cart: Vec<CartItem> = Vec::new();
            for (index, qty) in picks {
                let Some(product) = catalog.get(index) else { continue };
                if cart.iter().any(|it| it.sku == product.sku) {
                    continue;
                }
                cart.push(CartItem { sku: product.sku.clone(), name: product.name.clone(), price: product.price, qty });
            }
            (catalog.clone(), cart)
        })
    }

    proptest! {
        #[test]
        fn prop_suggestions_respect_invariants((catalog, cart) in catalog_strategy().prop_flat_map(cart_strategy)) {
            let result = recommend(&cart, &catalog);

            prop_assert!(result.len() <= MAX_SUGGESTIONS);
            if cart.is_empty() {
                prop_assert!(result.is_empty());
            }
            for p in &result {
                prop_assert!(p.active);
                prop_assert!(cart.iter().all(|it| it.sku != p.sku));
            }
            for pair in result.windows(2) {
                prop_assert!(pair[0].price >= pair[1].price);
            }

            let again = recommend(&cart, &catalog);
            prop_assert_eq!(result, again);
        }

        #[test]
        fn prop_missing_anchor_yields_nothing(catalog in catalog_strategy(), price in 0u32..5000) {
            let cart = vec![CartItem { sku: "NOT-IN-CATALOG".into(), name: "Ghost".into(), price: 100.0 + price as f64, qty: 1 }];
            prop_assert!(recommend(&cart, &catalog).is_empty());
        }
    }
}
