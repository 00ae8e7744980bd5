//! Infrastructure - concrete adapters behind the ports

pub mod http;
pub mod platform;
pub mod testing;
