//! Browser HTTP gateway backed by gloo-net

use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use crate::infrastructure::http::{body_to_value, error_from_response};
use crate::ports::outbound::{ApiError, RawApiPort};
use crate::session::Session;

pub struct HttpGateway {
    base_url: String,
    session: Session,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, session }
    }

    fn builder(&self, builder: RequestBuilder) -> RequestBuilder {
        let mut builder = builder.header("Content-Type", "application/json");
        if let Some(token) = self.session.token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        builder
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle(&self, response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(error_from_response(status, Some(&body), &self.session));
        }
        body_to_value(&body)
    }

    async fn send_bodyless(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let response = self
            .builder(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.handle(response).await
    }

    async fn send_json(&self, builder: RequestBuilder, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .builder(builder)
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.handle(response).await
    }
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for HttpGateway {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.send_bodyless(Request::get(&self.url(path))).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send_json(Request::post(&self.url(path)), body).await
    }

    async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.send_bodyless(Request::post(&self.url(path))).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send_json(Request::put(&self.url(path)), body).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send_bodyless(Request::delete(&self.url(path))).await
    }
}
