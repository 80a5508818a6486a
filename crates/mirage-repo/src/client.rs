//! The network-client seam
//!
//! Live repositories speak to the backend exclusively through this trait.
//! The production implementation (a real HTTP client plus response-schema
//! validation) lives outside this workspace; the scenario layer provides a
//! simulated implementation that answers from the demo dataset.

use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// Request method. `Patch` carries merge semantics for updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// One backend request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path only, e.g. `/api/users/user-3`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    #[must_use]
    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Patch,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// First value of a query parameter
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport used by live repositories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// Send a request and return the decoded JSON body
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// Stand-in used where the production HTTP client has not been injected.
/// Every call fails as a network error; the real client lives outside this
/// workspace and is supplied at wiring time.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredClient;

#[async_trait]
impl NetworkClient for UnconfiguredClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        tracing::warn!(path = %request.path, "no network client configured");
        Err(ApiError::network("no network client configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_append_and_read_back() {
        let request = ApiRequest::get("/api/records")
            .with_query("page", "2")
            .with_query("pageSize", "10");

        assert_eq!(request.query_param("page"), Some("2"));
        assert_eq!(request.query_param("pageSize"), Some("10"));
        assert_eq!(request.query_param("missing"), None);
    }

    #[test]
    fn constructors_set_method_and_body() {
        let post = ApiRequest::post("/api/search", serde_json::json!({"query": "x"}));
        assert_eq!(post.method, Method::Post);
        assert!(post.body.is_some());

        let del = ApiRequest::delete("/api/users/u1");
        assert_eq!(del.method, Method::Delete);
        assert!(del.body.is_none());
    }
}
