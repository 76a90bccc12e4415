//! Common types and data structures

/// A purchasable item from the compiled-in catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    /// Display name of the category, e.g. "Vegetables"
    pub category: &'static str,
    pub price: u32,
    pub original_price: u32,
    pub price_unit: &'static str,
    pub image: &'static str,
    /// Discount in percent, 0 when not on sale
    pub discount: u8,
    pub stock: u32,
    pub organic: bool,
    pub rating: f32,
    pub reviews: u32,
}

impl Product {
    pub fn is_discounted(&self) -> bool {
        self.original_price > self.price
    }
}

/// Category selector entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}
