//! Test support - fake providers and domain fixtures
//!
//! Used by this crate's own tests and available to downstream bindings
//! that want to drive controllers without a backend.

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::{SleepProvider, StorageProvider};

/// In-memory [`StorageProvider`]; clones share the map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorage {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok().and_then(|v| v.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

/// [`SleepProvider`] that resolves immediately, so replay tests run the
/// whole auto-advance loop without waiting.
#[derive(Clone, Default)]
pub struct InstantSleep;

impl SleepProvider for InstantSleep {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async {})
    }
}
