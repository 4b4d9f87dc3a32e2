//! # View Projection
//!
//! Projects the current page slice and cart membership into display
//! records. Nothing here decides anything: it formats numbers id-ID style
//! and derives the in-cart flag, and that is all.
//!
//! Number formatting follows the audience's locale: comma as the decimal
//! separator for sizes (`1,20 GB`), dot-grouped thousands for prices
//! (`Rp 2.000`, via [`Rupiah`]'s `Display`).

use crate::cart::Cart;
use crate::price::base_price;
use crate::types::Item;

// =============================================================================
// Display Records
// =============================================================================

/// One rendered catalog row, ready for whatever surface draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub name: String,
    /// `"6,40 GB"`
    pub size_display: String,
    /// `"Rp 12.800"` — the price actually charged.
    pub price_display: String,
    /// The pre-discount price, present only when a discount is in effect,
    /// so the surface can show a strike-through original.
    pub discounted_from: Option<String>,
    /// Whether the item is currently in the cart.
    pub in_cart: bool,
}

/// Projects a page of items against the cart.
pub fn project(page_items: &[Item], cart: &Cart) -> Vec<ItemRow> {
    page_items
        .iter()
        .map(|item| ItemRow {
            name: item.name.clone(),
            size_display: format_size_gb(item.size_gb),
            price_display: item.price().to_string(),
            discounted_from: item
                .has_discount()
                .then(|| base_price(item.size_gb).to_string()),
            in_cart: cart.contains(&item.name),
        })
        .collect()
}

/// Formats a size as two decimals with a comma separator: `1,20 GB`.
pub fn format_size_gb(size_gb: f64) -> String {
    format!("{size_gb:.2} GB").replace('.', ",")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_gb_comma_decimal() {
        assert_eq!(format_size_gb(1.2), "1,20 GB");
        assert_eq!(format_size_gb(0.5), "0,50 GB");
        assert_eq!(format_size_gb(12.0), "12,00 GB");
    }

    #[test]
    fn test_project_full_price_row() {
        let items = [Item::new("Stardew Valley", 1.2)];
        let rows = project(&items, &Cart::new());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Stardew Valley");
        assert_eq!(rows[0].size_display, "1,20 GB");
        assert_eq!(rows[0].price_display, "Rp 2.000");
        assert_eq!(rows[0].discounted_from, None);
        assert!(!rows[0].in_cart);
    }

    #[test]
    fn test_project_discounted_row_shows_original_price() {
        let items = [Item::with_discount("Hades", 6.4, 0.2)];
        let rows = project(&items, &Cart::new());

        // 6.4 rounds to 6 → base 12.000, 20% off → 9.600
        assert_eq!(rows[0].price_display, "Rp 9.600");
        assert_eq!(rows[0].discounted_from.as_deref(), Some("Rp 12.000"));
    }

    #[test]
    fn test_project_marks_cart_membership() {
        let items = [Item::new("A", 1.0), Item::new("B", 2.0)];
        let mut cart = Cart::new();
        cart.toggle(&items[1]);

        let rows = project(&items, &cart);
        assert!(!rows[0].in_cart);
        assert!(rows[1].in_cart);
    }

    #[test]
    fn test_project_empty_page_is_safe() {
        assert!(project(&[], &Cart::new()).is_empty());
    }
}
