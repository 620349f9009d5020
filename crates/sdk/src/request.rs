//! Request descriptors and the executor seam.

use crate::error::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Query parameters, already stringified.
pub type QueryParams = BTreeMap<String, String>;

/// HTTP methods used by App Store Connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(ClientError::Config(format!(
                "unsupported HTTP method: {}",
                other
            ))),
        }
    }
}

/// One call against the App Store Connect API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Versioned path, e.g. `/v1/apps/123`.
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Patch, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Add a query parameter. Empty values are dropped.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.query.insert(key.into(), value);
        }
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Anything that can execute [`ApiRequest`]s and return the response envelope.
///
/// Implemented by [`crate::AscClient`]; tools depend on this trait so they can
/// be exercised against an in-memory fake.
#[async_trait::async_trait]
pub trait ApiExecutor: Send + Sync {
    /// Execute a single request. Empty responses come back as `{"data": null}`.
    async fn execute(&self, request: ApiRequest) -> ClientResult<Value>;

    /// Execute a request and follow `links.next` until exhausted, concatenating
    /// the `data` of every page.
    async fn execute_all_pages(&self, request: ApiRequest) -> ClientResult<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_parsing() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("PATCH".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert!("PUT".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_method_serde() {
        assert_eq!(serde_json::to_value(HttpMethod::Delete).unwrap(), json!("DELETE"));
        let method: HttpMethod = serde_json::from_value(json!("POST")).unwrap();
        assert_eq!(method, HttpMethod::Post);
    }

    #[test]
    fn test_builder_skips_empty_query_values() {
        let request = ApiRequest::get("/v1/apps")
            .with_query("filter[bundleId]", "com.example.app")
            .with_query("include", "")
            .with_query("limit", "50");

        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query["limit"], "50");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_post_carries_body() {
        let request = ApiRequest::post("/v1/betaGroups", json!({"data": {"type": "betaGroups"}}));

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body.unwrap()["data"]["type"], "betaGroups");
    }
}
