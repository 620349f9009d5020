//! Error types for the App Store Connect client.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types that can occur when talking to App Store Connect.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error (status {status}): {}", summarize(.errors))]
    Api {
        status: u16,
        errors: Vec<ApiErrorEntry>,
    },

    /// Invalid configuration (missing or malformed credentials, bad base URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bearer token could not be signed.
    #[error("Failed to sign bearer token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `links.next` URL pointed away from the configured API host.
    #[error("Refusing to follow pagination link to another host: {0}")]
    ForeignNextLink(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Build an API error from a non-success status and the raw response body.
    ///
    /// A JSON:API error document yields its `errors` array verbatim. Anything
    /// else collapses into a single synthetic entry carrying the status code and
    /// its canonical reason phrase.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let errors = match serde_json::from_str::<ErrorDocument>(body) {
            Ok(document) if !document.errors.is_empty() => document.errors,
            _ => vec![ApiErrorEntry::synthetic(status, body)],
        };

        Self::Api {
            status: status.as_u16(),
            errors,
        }
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Normalized error list of an API error; empty for every other kind.
    pub fn api_errors(&self) -> &[ApiErrorEntry] {
        match self {
            Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}

fn summarize(errors: &[ApiErrorEntry]) -> String {
    errors
        .iter()
        .map(|e| match &e.detail {
            Some(detail) => format!("{} - {} ({})", e.code, e.title, detail),
            None => format!("{} - {}", e.code, e.title),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// JSON:API error document returned by App Store Connect.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDocument {
    pub errors: Vec<ApiErrorEntry>,
}

/// One entry of a JSON:API `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,
}

impl ApiErrorEntry {
    fn synthetic(status: StatusCode, body: &str) -> Self {
        let body = body.trim();
        Self {
            id: None,
            status: Some(status.as_u16().to_string()),
            code: format!("HTTP_{}", status.as_u16()),
            title: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
            detail: (!body.is_empty()).then(|| body.to_string()),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_parses_jsonapi_errors() {
        let body = r#"{
            "errors": [{
                "id": "abc",
                "status": "409",
                "code": "ENTITY_ERROR.ATTRIBUTE.INVALID",
                "title": "An attribute value is invalid.",
                "detail": "The version string is not valid.",
                "source": { "pointer": "/data/attributes/versionString" }
            }]
        }"#;

        let err = ClientError::from_response(StatusCode::CONFLICT, body);
        assert_eq!(err.status(), Some(409));

        let errors = err.api_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "ENTITY_ERROR.ATTRIBUTE.INVALID");
        assert_eq!(errors[0].title, "An attribute value is invalid.");
        assert_eq!(
            errors[0].detail.as_deref(),
            Some("The version string is not valid.")
        );
        assert!(errors[0].source.is_some());
    }

    #[test]
    fn test_from_response_unparseable_body() {
        let err = ClientError::from_response(StatusCode::BAD_GATEWAY, "<html>oops</html>");

        let errors = err.api_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].status.as_deref(), Some("502"));
        assert_eq!(errors[0].code, "HTTP_502");
        assert_eq!(errors[0].title, "Bad Gateway");
        assert_eq!(errors[0].detail.as_deref(), Some("<html>oops</html>"));
    }

    #[test]
    fn test_from_response_empty_body() {
        let err = ClientError::from_response(StatusCode::UNAUTHORIZED, "");

        let errors = err.api_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].title, "Unauthorized");
        assert!(errors[0].detail.is_none());
    }

    #[test]
    fn test_from_response_keeps_entries_missing_code_or_title() {
        let body = r#"{"errors":[{"status":"400","detail":"Bad filter"},{"code":"NOT_FOUND"}]}"#;
        let err = ClientError::from_response(StatusCode::BAD_REQUEST, body);

        let errors = err.api_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].code, "");
        assert_eq!(errors[0].detail.as_deref(), Some("Bad filter"));
        assert_eq!(errors[1].code, "NOT_FOUND");
        assert_eq!(errors[1].title, "");
    }

    #[test]
    fn test_from_response_json_without_errors_array() {
        let err = ClientError::from_response(StatusCode::NOT_FOUND, r#"{"message":"nope"}"#);

        let errors = err.api_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "HTTP_404");
    }

    #[test]
    fn test_display_includes_status_and_codes() {
        let err = ClientError::Api {
            status: 403,
            errors: vec![ApiErrorEntry {
                id: None,
                status: Some("403".to_string()),
                code: "FORBIDDEN_ERROR".to_string(),
                title: "This request is forbidden for security reasons".to_string(),
                detail: None,
                source: None,
            }],
        };

        let message = err.to_string();
        assert!(message.contains("status 403"));
        assert!(message.contains("FORBIDDEN_ERROR"));
    }

    #[test]
    fn test_non_api_errors_have_no_entries() {
        let err = ClientError::Config("missing key".to_string());
        assert!(err.api_errors().is_empty());
        assert_eq!(err.status(), None);
    }
}
