//! Shopping cart state
//!
//! Lines are unique by product id and keep first-insertion order. Totals
//! are recomputed from the lines on every call.

use crate::types::Product;
use tracing::debug;

/// One (product, quantity) pairing. Quantity is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartLine {
    pub product: &'static Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        self.product.price as u64 * self.quantity as u64
    }
}

#[derive(Debug, Default, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `product`, merging into an existing line for the
    /// same id. A zero quantity is ignored.
    pub fn add(&mut self, product: &'static Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                debug!(product = product.id, quantity = line.quantity, "Cart line updated");
            }
            None => {
                self.lines.push(CartLine { product, quantity });
                debug!(product = product.id, quantity, "Cart line added");
            }
        }
    }

    pub fn add_one(&mut self, product: &'static Product) {
        self.add(product, 1);
    }

    /// Remove the line for `product_id`. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: &str) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        if self.lines.len() != before {
            debug!(product = product_id, "Cart line removed");
        }
    }

    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity as u64).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .map_or(0, |l| l.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{product_by_id, PRODUCTS};

    fn product(id: &str) -> &'static Product {
        product_by_id(id).unwrap()
    }

    fn expected_total(cart: &Cart) -> u64 {
        cart.lines()
            .iter()
            .map(|l| l.product.price as u64 * l.quantity as u64)
            .sum()
    }

    #[test]
    fn repeated_add_merges_into_one_line() {
        let mut cart = Cart::new();
        let tomatoes = product("veg_002");
        cart.add(tomatoes, 1);
        cart.add(tomatoes, 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.quantity_of("veg_002"), 3);
        assert_eq!(cart.total(), 180);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn removing_absent_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_one(product("oil_001"));
        let before = cart.lines().to_vec();

        cart.remove("bev_001");
        cart.remove("does-not-exist");

        assert_eq!(cart.lines(), before.as_slice());
    }

    #[test]
    fn remove_deletes_whole_line() {
        let mut cart = Cart::new();
        cart.add(product("grain_001"), 4);
        cart.add_one(product("dairy_001"));
        cart.remove("grain_001");

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of("grain_001"), 0);
        assert_eq!(cart.total(), 55);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn zero_quantity_add_is_ignored() {
        let mut cart = Cart::new();
        cart.add(product("veg_001"), 0);
        assert!(cart.is_empty());

        cart.add_one(product("veg_001"));
        cart.add(product("veg_001"), 0);
        assert_eq!(cart.quantity_of("veg_001"), 1);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_one(product("bev_001"));
        cart.add_one(product("veg_001"));
        cart.add_one(product("bev_001"));

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec!["bev_001", "veg_001"]);
    }

    #[test]
    fn totals_track_any_sequence() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.item_count(), 0);

        for (i, p) in PRODUCTS.iter().enumerate() {
            cart.add(p, i as u32 + 1);
            assert_eq!(cart.total(), expected_total(&cart));
        }
        cart.remove("veg_002");
        cart.add(product("oil_001"), 5);
        cart.remove("grain_002");
        cart.add(product("veg_002"), 2);

        assert_eq!(cart.total(), expected_total(&cart));
        let qty_sum: u64 = cart.lines().iter().map(|l| l.quantity as u64).sum();
        assert_eq!(cart.item_count(), qty_sum);
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn subtotal_is_price_times_quantity() {
        let line = CartLine { product: product("grain_001"), quantity: 3 };
        assert_eq!(line.subtotal(), 540);
    }
}
