//! Durable key-value backends for the cart/favorites store.
//!
//! The browser build talks to `localStorage` directly; the native build
//! mirrors it with a single JSON file holding the whole key-value map.
//! Writes are treated as always succeeding: a failed flush is logged and
//! the in-memory state stays authoritative for the rest of the session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// Origin-scoped string key-value storage, localStorage-shaped.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

/// In-memory backend. Used by tests and as the fallback when no durable
/// medium is available. Clones share the same underlying map, like two
/// handles onto the same localStorage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

/// File-backed key-value map for native builds.
///
/// The whole map is rewritten on every `write`, matching the original's
/// serialize-the-full-collection-per-mutation behavior.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// Open (or lazily create) the store file. A missing file is an empty
    /// map; a corrupt one is recovered as empty with a logged warning.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!(
                        "⚠️  Corrupt store file {}, starting empty: {}",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, entries }
    }

    fn flush(&self) -> anyhow::Result<()> {
        use anyhow::Context;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context(format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize store map")?;
        std::fs::write(&self.path, raw)
            .context(format!("Failed to write store file: {}", self.path.display()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
        if let Err(e) = self.flush() {
            log::warn!("⚠️  Store flush failed (state kept in memory): {e:#}");
        }
    }
}

/// The browser's actual localStorage.
#[cfg(target_arch = "wasm32")]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("⚠️  localStorage write failed for '{key}': {e:?}");
            }
        } else {
            log::warn!("⚠️  localStorage unavailable, '{key}' not persisted");
        }
    }
}

/// Pick the durable medium for this platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_backend(path_override: Option<&Path>) -> Box<dyn StorageBackend> {
    let path = path_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(crate::config::STORE_FILE_PATH));
    Box::new(FileStore::open(path))
}

#[cfg(target_arch = "wasm32")]
pub fn default_backend(_path_override: Option<&std::path::Path>) -> Box<dyn StorageBackend> {
    Box::new(LocalStore)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let mut a = MemoryStore::new();
        let b = a.clone();

        a.write("cart", "[]");
        assert_eq!(b.read("cart").as_deref(), Some("[]"));
        assert_eq!(b.read("favorites"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_round_trips_and_recovers_from_corruption() {
        let dir = std::env::temp_dir().join("atelier_store_test");
        let path = dir.join("kv.json");
        let _ = std::fs::remove_file(&path);

        {
            let mut store = FileStore::open(&path);
            assert_eq!(store.read("cart"), None);
            store.write("cart", r#"[{"id":"p1"}]"#);
        }

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.read("cart").as_deref(), Some(r#"[{"id":"p1"}]"#));

        // Corruption on disk must degrade to an empty map, not a panic.
        std::fs::write(&path, "{ not json").unwrap();
        let recovered = FileStore::open(&path);
        assert_eq!(recovered.read("cart"), None);
    }
}
