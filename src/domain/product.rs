use strum_macros::{Display, EnumIter};

/// Catalog sections, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ProductCategory {
    Outerwear,
    Dresses,
    Knitwear,
    Accessories,
}

// A catalog entry. The id is the stable key every cart/favorites
// operation is driven by; it must never change between releases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    /// Price as displayed, e.g. "189.00". Parsed lazily on add-to-cart.
    pub price_text: &'static str,
    pub category: ProductCategory,
    /// Featured in the "New Arrivals" slider strip.
    pub new_arrival: bool,
}

impl Product {
    pub fn price(&self) -> f64 {
        parse_price(self.price_text)
    }
}

/// Parse a display price into a float.
///
/// Mirrors the storefront's historical behavior: a non-numeric string
/// becomes NaN and the caller carries on. Nothing is rejected here.
pub fn parse_price(price_text: &str) -> f64 {
    price_text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimal() {
        assert_eq!(parse_price("19.99"), 19.99);
        assert_eq!(parse_price(" 250.00 "), 250.0);
    }

    #[test]
    fn garbage_becomes_nan_not_an_error() {
        assert!(parse_price("abc").is_nan());
        assert!(parse_price("").is_nan());
    }
}
