//! Static product catalog and the filter predicate over it

use crate::constants::ALL_CATEGORIES;
use crate::types::{Category, Product};

pub static CATEGORIES: [Category; 7] = [
    Category { id: ALL_CATEGORIES, name: "All Products" },
    Category { id: "vegetables", name: "Vegetables" },
    Category { id: "grains", name: "Grains" },
    Category { id: "dairy", name: "Dairy" },
    Category { id: "oils", name: "Oils" },
    Category { id: "natural", name: "Natural" },
    Category { id: "beverages", name: "Beverages" },
];

pub static PRODUCTS: [Product; 8] = [
    Product {
        id: "veg_001",
        name: "Fresh Spinach",
        category: "Vegetables",
        price: 100,
        original_price: 100,
        price_unit: "/bunch",
        image: "https://images.unsplash.com/photo-1576045057995-568f588f82fb?w=400&h=300&fit=crop",
        discount: 0,
        stock: 45,
        organic: false,
        rating: 4.5,
        reviews: 125,
    },
    Product {
        id: "grain_001",
        name: "Basmati Rice",
        category: "Grains",
        price: 180,
        original_price: 180,
        price_unit: "/kg",
        image: "https://images.unsplash.com/photo-1586201375761-83865001e31c?w=400&h=300&fit=crop",
        discount: 0,
        stock: 67,
        organic: false,
        rating: 4.8,
        reviews: 234,
    },
    Product {
        id: "veg_002",
        name: "Fresh Tomatoes",
        category: "Vegetables",
        price: 60,
        original_price: 80,
        price_unit: "/kg",
        image: "https://images.unsplash.com/photo-1546470427-e2e5b8d47c83?w=400&h=300&fit=crop",
        discount: 25,
        stock: 28,
        organic: true,
        rating: 4.3,
        reviews: 89,
    },
    Product {
        id: "oil_001",
        name: "Mustard Oil",
        category: "Oils",
        price: 220,
        original_price: 220,
        price_unit: "/ltr",
        image: "https://images.unsplash.com/photo-1474979266404-7eaacbcd87c5?w=400&h=300&fit=crop",
        discount: 0,
        stock: 34,
        organic: false,
        rating: 4.6,
        reviews: 156,
    },
    Product {
        id: "veg_003",
        name: "Fresh Potatoes",
        category: "Vegetables",
        price: 40,
        original_price: 50,
        price_unit: "/kg",
        image: "https://images.unsplash.com/photo-1518977676601-b53f82aba655?w=400&h=300&fit=crop",
        discount: 10,
        stock: 78,
        organic: false,
        rating: 4.2,
        reviews: 67,
    },
    Product {
        id: "dairy_001",
        name: "Fresh Milk",
        category: "Dairy",
        price: 55,
        original_price: 55,
        price_unit: "/ltr",
        image: "https://images.unsplash.com/photo-1563636619-e9143da7973b?w=400&h=300&fit=crop",
        discount: 0,
        stock: 45,
        organic: true,
        rating: 4.7,
        reviews: 198,
    },
    Product {
        id: "grain_002",
        name: "Wheat Flour",
        category: "Grains",
        price: 45,
        original_price: 50,
        price_unit: "/kg",
        image: "https://images.unsplash.com/photo-1574323347407-f5e1ad6d020b?w=400&h=300&fit=crop",
        discount: 10,
        stock: 56,
        organic: false,
        rating: 4.4,
        reviews: 145,
    },
    Product {
        id: "bev_001",
        name: "Green Tea",
        category: "Beverages",
        price: 150,
        original_price: 150,
        price_unit: "/pack",
        image: "https://images.unsplash.com/photo-1556679343-c7306c1976bc?w=400&h=300&fit=crop",
        discount: 0,
        stock: 23,
        organic: true,
        rating: 4.5,
        reviews: 78,
    },
];

/// Products whose name contains `search` (case-insensitive) and whose
/// category matches `category_id`, in catalog order.
///
/// `category_id == "all"` disables the category check. The search text is
/// matched as-is, without trimming.
pub fn filter<'a>(products: &'a [Product], search: &str, category_id: &str) -> Vec<&'a Product> {
    let search_lower = search.to_lowercase();
    let all = category_id == ALL_CATEGORIES;
    let category_lower = category_id.to_lowercase();

    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&search_lower))
        .filter(|p| all || p.category.to_lowercase() == category_lower)
        .collect()
}

pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
pub fn product_by_id(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[&Product]) -> Vec<&'static str> {
        products.iter().map(|p| p.name).collect()
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let found = filter(&PRODUCTS, "tomato", ALL_CATEGORIES);
        assert_eq!(names(&found), vec!["Fresh Tomatoes"]);

        let found = filter(&PRODUCTS, "FRESH", ALL_CATEGORIES);
        assert_eq!(
            names(&found),
            vec!["Fresh Spinach", "Fresh Tomatoes", "Fresh Potatoes", "Fresh Milk"]
        );
    }

    #[test]
    fn category_only_filter() {
        let found = filter(&PRODUCTS, "", "vegetables");
        assert_eq!(
            names(&found),
            vec!["Fresh Spinach", "Fresh Tomatoes", "Fresh Potatoes"]
        );
        assert!(found.iter().all(|p| p.category == "Vegetables"));
    }

    #[test]
    fn category_id_is_case_insensitive() {
        assert_eq!(filter(&PRODUCTS, "", "GRAINS").len(), 2);
        assert_eq!(filter(&PRODUCTS, "", "Dairy").len(), 1);
    }

    #[test]
    fn empty_search_with_all_returns_whole_catalog() {
        let found = filter(&PRODUCTS, "", ALL_CATEGORIES);
        assert_eq!(found.len(), PRODUCTS.len());
        // Catalog order is preserved
        assert_eq!(found[0].id, "veg_001");
        assert_eq!(found[7].id, "bev_001");
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter(&PRODUCTS, "xyz-no-match", ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn natural_category_has_no_products() {
        assert!(filter(&PRODUCTS, "", "natural").is_empty());
    }

    #[test]
    fn search_and_category_combine() {
        let found = filter(&PRODUCTS, "fresh", "dairy");
        assert_eq!(names(&found), vec!["Fresh Milk"]);
        assert!(filter(&PRODUCTS, "rice", "vegetables").is_empty());
    }

    #[test]
    fn search_is_not_trimmed() {
        assert!(filter(&PRODUCTS, " tea ", ALL_CATEGORIES).is_empty());
        assert_eq!(filter(&PRODUCTS, "n tea", ALL_CATEGORIES).len(), 1);
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in PRODUCTS.iter().enumerate() {
            for b in &PRODUCTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_product_category_has_a_selector() {
        for p in &PRODUCTS {
            let id = p.category.to_lowercase();
            assert!(category_by_id(&id).is_some(), "no category for {}", p.name);
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(product_by_id("oil_001").map(|p| p.name), Some("Mustard Oil"));
        assert!(product_by_id("nope").is_none());
        assert_eq!(category_by_id(ALL_CATEGORIES).map(|c| c.name), Some("All Products"));
    }
}
