//! The static product catalog.
//!
//! Every entry carries a stable string id; the cart and favorites
//! collections key on it across sessions, so ids are append-only.

use crate::domain::{Product, ProductCategory};

pub const CATALOG: &[Product] = &[
    Product {
        id: "an-001",
        name: "Noir Trench Coat",
        price_text: "289.00",
        category: ProductCategory::Outerwear,
        new_arrival: false,
    },
    Product {
        id: "an-002",
        name: "Gilded Slip Dress",
        price_text: "179.00",
        category: ProductCategory::Dresses,
        new_arrival: true,
    },
    Product {
        id: "an-003",
        name: "Midnight Wool Overshirt",
        price_text: "145.00",
        category: ProductCategory::Outerwear,
        new_arrival: false,
    },
    Product {
        id: "an-004",
        name: "Sculpted Knit Turtleneck",
        price_text: "98.00",
        category: ProductCategory::Knitwear,
        new_arrival: true,
    },
    Product {
        id: "an-005",
        name: "Velvet Column Gown",
        price_text: "349.00",
        category: ProductCategory::Dresses,
        new_arrival: false,
    },
    Product {
        id: "an-006",
        name: "Brushed Mohair Cardigan",
        price_text: "156.00",
        category: ProductCategory::Knitwear,
        new_arrival: true,
    },
    Product {
        id: "an-007",
        name: "Gold-Clasp Leather Belt",
        price_text: "64.00",
        category: ProductCategory::Accessories,
        new_arrival: false,
    },
    Product {
        id: "an-008",
        name: "Onyx Silk Scarf",
        price_text: "72.00",
        category: ProductCategory::Accessories,
        new_arrival: true,
    },
    Product {
        id: "an-009",
        name: "Tailored Storm Parka",
        price_text: "312.00",
        category: ProductCategory::Outerwear,
        new_arrival: true,
    },
    Product {
        id: "an-010",
        name: "Obsidian Evening Clutch",
        price_text: "118.00",
        category: ProductCategory::Accessories,
        new_arrival: false,
    },
];

/// The "New Arrivals" strip, in catalog order.
pub fn new_arrivals() -> impl Iterator<Item = &'static Product> {
    CATALOG.iter().filter(|p| p.new_arrival)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn catalog_ids_are_unique() {
        let unique = CATALOG.iter().map(|p| p.id).unique().count();
        assert_eq!(unique, CATALOG.len());
    }

    #[test]
    fn every_price_parses_clean() {
        for product in CATALOG {
            assert!(
                product.price().is_finite(),
                "catalog price must parse: {}",
                product.id
            );
        }
    }
}
