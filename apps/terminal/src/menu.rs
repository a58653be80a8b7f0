//! # Standard Menu
//!
//! The built-in catalog the terminal serves. Prices are authored in
//! centavos so the table is exact by construction.

use kiosko_core::{Catalog, ItemId, MenuItem, Money};

/// (id, name, unit price in centavos)
const STANDARD_ITEMS: &[(u32, &str, i64)] = &[
    (1, "Chicken", 15_000),
    (2, "Pizza", 45_000),
    (3, "Ice Cream", 8_000),
    (4, "Burger", 14_000),
];

/// Builds the standard four-item menu.
pub fn standard_menu() -> Catalog {
    Catalog::new(
        STANDARD_ITEMS
            .iter()
            .map(|&(id, name, centavos)| {
                MenuItem::new(ItemId::new(id), name, Money::from_centavos(centavos))
            })
            .collect(),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_menu_contents() {
        let menu = standard_menu();
        assert_eq!(menu.len(), 4);

        let chicken = menu.lookup(ItemId::new(1)).unwrap();
        assert_eq!(chicken.name, "Chicken");
        assert_eq!(chicken.unit_price, Money::from_pesos(150));

        let burger = menu.lookup(ItemId::new(4)).unwrap();
        assert_eq!(burger.name, "Burger");
        assert_eq!(burger.unit_price, Money::from_pesos(140));
    }

    #[test]
    fn test_standard_menu_display_order() {
        let menu = standard_menu();
        let names: Vec<&str> = menu.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken", "Pizza", "Ice Cream", "Burger"]);
    }
}
