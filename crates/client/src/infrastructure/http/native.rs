//! Native HTTP gateway backed by reqwest

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use crate::infrastructure::http::{body_to_value, error_from_response};
use crate::ports::outbound::{ApiError, RawApiPort};
use crate::session::Session;

pub struct HttpGateway {
    base_url: String,
    client: Client,
    session: Session,
}

impl HttpGateway {
    /// `base_url` is the backend root (e.g. `https://game.example.com/api`);
    /// route paths from `nocturne_protocol::routes` are appended to it.
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
            session,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.session.token() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        builder
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            debug!(status, "request failed");
            return Err(error_from_response(status, Some(&body), &self.session));
        }
        body_to_value(&body)
    }
}

#[async_trait::async_trait]
impl RawApiPort for HttpGateway {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(self.request(Method::POST, path)).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.execute(self.request(Method::DELETE, path)).await
    }
}
