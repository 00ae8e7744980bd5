//! Typed API wrapper for application services.
//!
//! Gateway adapters are object-safe and JSON-valued ([`RawApiPort`]); the
//! services want typed results. `Api` wraps an `Arc<dyn RawApiPort>`,
//! deserializes each body into the shared response envelope, and hands the
//! envelope to [`ParseResponse`] so services see `Result<T, ServiceError>`
//! and nothing else.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use nocturne_protocol::ResponseResult;

use crate::application::error::{ParseResponse, ServiceError};
use crate::ports::outbound::RawApiPort;

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let value = self.raw.get_json(path).await?;
        envelope(value)?.parse()
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let body = to_body(body)?;
        let value = self.raw.post_json(path, &body).await?;
        envelope(value)?.parse()
    }

    /// POST without a body, expecting a data payload back.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let value = self.raw.post_empty(path).await?;
        envelope(value)?.parse()
    }

    /// POST without a body, expecting only a success envelope back.
    pub async fn post_empty_unit(&self, path: &str) -> Result<(), ServiceError> {
        let value = self.raw.post_empty(path).await?;
        envelope(value)?.parse_empty()
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let body = to_body(body)?;
        let value = self.raw.put_json(path, &body).await?;
        envelope(value)?.parse()
    }

    pub async fn delete(&self, path: &str) -> Result<(), ServiceError> {
        let value = self.raw.delete(path).await?;
        envelope(value)?.parse_empty()
    }
}

fn envelope(value: Value) -> Result<ResponseResult, ServiceError> {
    serde_json::from_value(value).map_err(|e| ServiceError::Parse(e.to_string()))
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ServiceError> {
    serde_json::to_value(body).map_err(|e| ServiceError::Parse(e.to_string()))
}
