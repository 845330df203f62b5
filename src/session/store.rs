//! Credential storage backed by browser `localStorage`.
//!
//! One bearer credential at a time, scoped to the origin and surviving page
//! reloads. Reading and clearing never fail: a disabled or unavailable
//! storage area behaves like an empty one.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex};

/// Key under which the bearer credential is persisted.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "patient_records_token";

/// Shared handle to the credential store, injected via context.
pub type SharedStore = Arc<dyn CredentialStore>;

/// Single-slot store for the current bearer credential.
///
/// Implementations hold at most one credential. `clear` is idempotent:
/// clearing an empty store is a no-op, never an error.
pub trait CredentialStore: Send + Sync {
    /// Persist a credential, replacing any previous one.
    fn save(&self, credential: &str);

    /// The currently stored credential, if any.
    fn load(&self) -> Option<String>;

    /// Remove the stored credential.
    fn clear(&self);
}

/// `localStorage`-backed store used in the browser.
///
/// Outside the `hydrate` feature (server rendering, native tests) every
/// method degrades to the empty store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl CredentialStore for BrowserStore {
    fn save(&self, credential: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(STORAGE_KEY, credential);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
        }
    }

    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// In-memory store for unit tests and server-side rendering.
///
/// Concurrent writers are last-writer-wins; there is no versioning.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl CredentialStore for MemoryStore {
    fn save(&self, credential: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(credential.to_owned());
        }
    }

    fn load(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
