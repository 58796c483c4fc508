//! The cart/favorites store: the only stateful core of the app.
//!
//! Both collections are sets keyed by product id, held in insertion order
//! and serialized as full JSON arrays after every mutation. Load happens
//! once at construction; a missing or corrupt stored value starts the
//! collection empty instead of failing the app.

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::config::{CART_STORAGE_KEY, FAVORITES_STORAGE_KEY};
use crate::domain::parse_price;
use crate::store::backend::StorageBackend;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// NaN is representable: it round-trips through JSON `null`, the same
    /// encoding `JSON.stringify` gives a NaN price.
    #[serde(with = "nan_as_null")]
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: String,
    pub name: String,
}

/// What a favorite toggle did, so the UI can pick the matching feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

pub struct CartStore {
    cart: Vec<CartItem>,
    favorites: Vec<FavoriteItem>,
    backend: Box<dyn StorageBackend>,
}

impl CartStore {
    /// Deserialize-or-default from the backend. Missing keys are empty
    /// collections; unparsable values are recovered as empty with a warning.
    pub fn load(backend: Box<dyn StorageBackend>) -> Self {
        let cart = decode_collection(backend.read(CART_STORAGE_KEY), CART_STORAGE_KEY);
        let favorites =
            decode_collection(backend.read(FAVORITES_STORAGE_KEY), FAVORITES_STORAGE_KEY);

        Self {
            cart,
            favorites,
            backend,
        }
    }

    /// Add a product to the cart: repeat additions of the same id bump the
    /// quantity, never create a second entry. Always persists.
    pub fn add_to_cart(&mut self, product_id: &str, product_name: &str, price_text: &str) {
        match self.cart.iter_mut().find(|item| item.id == product_id) {
            Some(existing) => existing.quantity += 1,
            None => self.cart.push(CartItem {
                id: product_id.to_owned(),
                name: product_name.to_owned(),
                price: parse_price(price_text),
                quantity: 1,
            }),
        }

        self.persist_cart();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_store_events {
            log::info!("🛒 Cart add '{}', badge now {}", product_id, self.badge_count());
        }
    }

    /// Strict on/off favorite toggle keyed by id. Persists on every call,
    /// even when two calls cancel out.
    pub fn toggle_favorite(&mut self, product_id: &str, product_name: &str) -> FavoriteToggle {
        let outcome = if self.favorites.iter().any(|item| item.id == product_id) {
            self.favorites.retain(|item| item.id != product_id);
            FavoriteToggle::Removed
        } else {
            self.favorites.push(FavoriteItem {
                id: product_id.to_owned(),
                name: product_name.to_owned(),
            });
            FavoriteToggle::Added
        };

        self.persist_favorites();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_store_events {
            log::info!("❤️  Favorite toggle '{}': {:?}", product_id, outcome);
        }

        outcome
    }

    /// The badge number: distinct cart entries, NOT total quantity.
    pub fn badge_count(&self) -> usize {
        self.cart.len()
    }

    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.favorites.iter().any(|item| item.id == product_id)
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn favorites(&self) -> &[FavoriteItem] {
        &self.favorites
    }

    /// Empty both collections and persist the empty state.
    pub fn clear_all(&mut self) {
        self.cart.clear();
        self.favorites.clear();
        self.persist_cart();
        self.persist_favorites();
    }

    fn persist_cart(&mut self) {
        persist_collection(self.backend.as_mut(), CART_STORAGE_KEY, &self.cart);
    }

    fn persist_favorites(&mut self) {
        persist_collection(self.backend.as_mut(), FAVORITES_STORAGE_KEY, &self.favorites);
    }
}

fn decode_collection<T: DeserializeOwned>(raw: Option<String>, key: &str) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("⚠️  Corrupt '{key}' entry in storage, starting empty: {e}");
            Vec::new()
        }
    }
}

fn persist_collection<T: Serialize>(backend: &mut dyn StorageBackend, key: &str, items: &[T]) {
    match serde_json::to_string(items) {
        Ok(raw) => backend.write(key, &raw),
        // Unreachable for these types, but a failed persist must never
        // take the page down.
        Err(e) => log::warn!("⚠️  Could not serialize '{key}': {e}"),
    }
}

/// JSON has no NaN; mirror `JSON.stringify` by writing `null` for any
/// non-finite price and reading `null` back as NaN.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if price.is_finite() {
            serializer.serialize_f64(*price)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::MemoryStore;

    fn store_on(backend: &MemoryStore) -> CartStore {
        CartStore::load(Box::new(backend.clone()))
    }

    #[test]
    fn repeat_add_increments_quantity_instead_of_duplicating() {
        let backend = MemoryStore::new();
        let mut store = store_on(&backend);

        store.add_to_cart("p1", "Shirt", "19.99");
        store.add_to_cart("p1", "Shirt", "19.99");

        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart()[0].quantity, 2);
        assert_eq!(store.badge_count(), 1);
    }

    #[test]
    fn badge_counts_distinct_entries_not_total_quantity() {
        let backend = MemoryStore::new();
        let mut store = store_on(&backend);

        store.add_to_cart("p1", "Shirt", "19.99");
        store.add_to_cart("p1", "Shirt", "19.99");
        store.add_to_cart("p2", "Coat", "120.00");

        assert_eq!(store.cart().len(), 2);
        assert_eq!(store.cart()[0].quantity, 2);
        assert_eq!(store.cart()[1].quantity, 1);
        assert_eq!(store.badge_count(), 2);
    }

    #[test]
    fn favorite_double_toggle_is_an_exact_round_trip() {
        let backend = MemoryStore::new();
        let mut store = store_on(&backend);
        store.toggle_favorite("p9", "Scarf");
        let before = store.favorites().to_vec();

        assert_eq!(store.toggle_favorite("p1", "Shirt"), FavoriteToggle::Added);
        assert!(store.is_favorite("p1"));

        assert_eq!(store.toggle_favorite("p1", "Shirt"), FavoriteToggle::Removed);
        assert!(!store.is_favorite("p1"));
        assert_eq!(store.favorites(), before.as_slice());
    }

    #[test]
    fn cart_round_trips_through_the_backend() {
        let backend = MemoryStore::new();
        store_on(&backend).add_to_cart("p1", "Shirt", "19.99");

        // Fresh store, same durable medium: one entry, exactly as written.
        let reloaded = store_on(&backend);
        assert_eq!(
            reloaded.cart(),
            &[CartItem {
                id: "p1".to_owned(),
                name: "Shirt".to_owned(),
                price: 19.99,
                quantity: 1,
            }]
        );
        assert_eq!(reloaded.badge_count(), 1);
    }

    #[test]
    fn favorites_survive_reload() {
        let backend = MemoryStore::new();
        store_on(&backend).toggle_favorite("p1", "Shirt");

        let reloaded = store_on(&backend);
        assert!(reloaded.is_favorite("p1"));
        assert_eq!(reloaded.favorites().len(), 1);
    }

    #[test]
    fn missing_storage_keys_initialize_empty() {
        let store = store_on(&MemoryStore::new());
        assert!(store.cart().is_empty());
        assert!(store.favorites().is_empty());
        assert_eq!(store.badge_count(), 0);
    }

    #[test]
    fn corrupt_storage_recovers_as_empty() {
        let mut backend = MemoryStore::new();
        backend.write(CART_STORAGE_KEY, "[{ definitely not json");
        backend.write(FAVORITES_STORAGE_KEY, "42");

        let store = store_on(&backend);
        assert!(store.cart().is_empty());
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn unparsable_price_is_accepted_as_nan() {
        let backend = MemoryStore::new();
        let mut store = store_on(&backend);

        store.add_to_cart("p1", "Mystery Item", "abc");

        assert_eq!(store.cart().len(), 1);
        assert!(store.cart()[0].price.is_nan());
    }

    #[test]
    fn nan_price_round_trips_as_json_null() {
        let backend = MemoryStore::new();
        store_on(&backend).add_to_cart("p1", "Mystery Item", "abc");

        // The durable layout mirrors JSON.stringify: NaN becomes null.
        let raw = backend.read(CART_STORAGE_KEY).unwrap();
        assert!(raw.contains(r#""price":null"#), "raw layout was: {raw}");

        let reloaded = store_on(&backend);
        assert!(reloaded.cart()[0].price.is_nan());
        assert_eq!(reloaded.cart()[0].quantity, 1);
    }

    #[test]
    fn every_mutation_rewrites_the_full_collection() {
        let backend = MemoryStore::new();
        let mut store = store_on(&backend);

        store.add_to_cart("p1", "Shirt", "19.99");
        store.add_to_cart("p2", "Coat", "120.00");

        let raw = backend.read(CART_STORAGE_KEY).unwrap();
        let parsed: Vec<CartItem> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn clear_all_persists_the_empty_state() {
        let backend = MemoryStore::new();
        let mut store = store_on(&backend);
        store.add_to_cart("p1", "Shirt", "19.99");
        store.toggle_favorite("p1", "Shirt");

        store.clear_all();

        assert_eq!(backend.read(CART_STORAGE_KEY).as_deref(), Some("[]"));
        assert_eq!(backend.read(FAVORITES_STORAGE_KEY).as_deref(), Some("[]"));
    }
}
