//! Application layer - typed API access and one service per backend area

pub mod api;
pub mod error;
pub mod services;

pub use api::Api;
pub use error::{ParseResponse, ServiceError};
