use web_sys::{ Storage, Window };

use crate::utils::{ MemoryStore, PreferenceStore };

/// `localStorage` when the browser grants it, otherwise a session-only copy.
pub enum BrowserStore {
    Local(Storage),
    Session(MemoryStore),
}

impl BrowserStore {
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => BrowserStore::Local(storage),
            Ok(None) => {
                log::warn!("localStorage unavailable, theme preference will not persist");
                BrowserStore::Session(MemoryStore::default())
            }
            Err(e) => {
                log::warn!("localStorage access denied, theme preference will not persist: {:?}", e);
                BrowserStore::Session(MemoryStore::default())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStore::Session(memory) => memory.load(key),
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        match self {
            BrowserStore::Local(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Failed to persist {}={}: {:?}", key, value, e);
                }
            }
            BrowserStore::Session(memory) => memory.save(key, value),
        }
    }
}
