use contracts::shared::session::KeyValueStore;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `KeyValueStore` over `window.localStorage`; every key is prefixed
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    prefix: String,
}

impl LocalStorageStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(&self.key(key)).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.set_item(&self.key(key), value).is_err() {
                log::warn!("localStorage write failed for '{}'", key);
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.remove_item(&self.key(key)).is_err() {
                log::warn!("localStorage remove failed for '{}'", key);
            }
        }
    }
}
