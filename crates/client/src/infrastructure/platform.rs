//! Platform provider implementations
//!
//! Target-specific implementations of the [`ports::outbound::platform`]
//! traits: tokio-backed sleep on native, gloo-timers in the browser, and
//! localStorage-backed token persistence on wasm. Native consumers pick a
//! storage implementation themselves (tests use
//! [`MemoryStorage`](crate::infrastructure::testing::MemoryStorage)).

use std::{future::Future, pin::Pin};

use crate::ports::outbound::SleepProvider;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Default)]
pub struct TokioSleep;

#[cfg(not(target_arch = "wasm32"))]
impl SleepProvider for TokioSleep {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(tokio::time::sleep(std::time::Duration::from_millis(ms)))
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Default)]
pub struct BrowserSleep;

#[cfg(target_arch = "wasm32")]
impl SleepProvider for BrowserSleep {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let clamped = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(clamped))
    }
}

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use crate::ports::outbound::StorageProvider;

    /// Browser localStorage, the token's home between page loads
    #[derive(Clone, Default)]
    pub struct LocalStorage;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    impl StorageProvider for LocalStorage {
        fn save(&self, key: &str, value: &str) {
            if let Some(storage) = storage() {
                let _ = storage.set_item(key, value);
            }
        }

        fn load(&self, key: &str) -> Option<String> {
            storage().and_then(|s| s.get_item(key).ok().flatten())
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;
