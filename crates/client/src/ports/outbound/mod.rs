//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application services and controllers to interact
//! with the backend and the host platform without depending on concrete
//! implementations.

pub mod platform;
pub mod raw_api_port;

pub use platform::{storage_keys, SleepProvider, StorageProvider};
pub use raw_api_port::{ApiError, RawApiPort};

#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
