//! Main client for the App Store Connect API.

use crate::auth::{JwtTokenProvider, TokenProvider};
use crate::config::{ClientConfig, Credentials, TokenPolicy, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES};
use crate::error::{ClientError, ClientResult};
use crate::request::{ApiExecutor, ApiRequest};
use crate::transport::HttpTransport;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Client for the App Store Connect API.
#[derive(Debug, Clone)]
pub struct AscClient {
    config: Arc<ClientConfig>,
    http: HttpTransport,
}

impl AscClient {
    /// Create a new client builder.
    pub fn builder() -> AscClientBuilder {
        AscClientBuilder::new()
    }

    fn from_parts(config: ClientConfig, tokens: Arc<dyn TokenProvider>) -> ClientResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone(), tokens)?;

        Ok(Self { config, http })
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl ApiExecutor for AscClient {
    async fn execute(&self, request: ApiRequest) -> ClientResult<Value> {
        self.http.execute(&request).await
    }

    async fn execute_all_pages(&self, request: ApiRequest) -> ClientResult<Value> {
        self.http.execute_all_pages(&request).await
    }
}

/// Builder for creating an [`AscClient`].
pub struct AscClientBuilder {
    base_url: String,
    max_pages: u32,
    user_agent: Option<String>,
    credentials: Option<Credentials>,
    token_policy: TokenPolicy,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl AscClientBuilder {
    /// Create a new builder pointed at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            user_agent: None,
            credentials: None,
            token_policy: TokenPolicy::default(),
            token_provider: None,
        }
    }

    /// Override the API host.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the page cap for paginated calls.
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Authenticate with an API key; tokens are signed locally.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn token_policy(mut self, policy: TokenPolicy) -> Self {
        self.token_policy = policy;
        self
    }

    /// Use a custom token source instead of API key credentials.
    pub fn token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Build the client. Fails if no authentication is configured, the base URL
    /// is invalid, or the private key cannot be parsed.
    pub fn build(self) -> ClientResult<AscClient> {
        let base_url = Url::parse(&self.base_url)?;
        if self.max_pages == 0 {
            return Err(ClientError::Config("max_pages must be at least 1".to_string()));
        }

        let tokens: Arc<dyn TokenProvider> = match (self.token_provider, self.credentials) {
            (Some(provider), _) => provider,
            (None, Some(credentials)) => {
                Arc::new(JwtTokenProvider::new(&credentials)?.with_policy(self.token_policy))
            }
            (None, None) => {
                return Err(ClientError::Config(
                    "credentials or a token provider are required".to_string(),
                ))
            }
        };

        let mut config = ClientConfig::new(base_url);
        config.max_pages = self.max_pages;
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        AscClient::from_parts(config, tokens)
    }
}

impl Default for AscClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;
    use crate::config::PrivateKeySource;
    use crate::test_support::TEST_PRIVATE_KEY;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_builder_requires_auth() {
        let result = AscClient::builder().build();
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = AscClient::builder()
            .base_url("not a url")
            .token_provider(Arc::new(StaticToken::new("t")))
            .build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_rejects_zero_page_cap() {
        let result = AscClient::builder()
            .max_pages(0)
            .token_provider(Arc::new(StaticToken::new("t")))
            .build();
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_builder_defaults() {
        let client = AscClient::builder()
            .token_provider(Arc::new(StaticToken::new("t")))
            .build()
            .unwrap();

        assert_eq!(client.config().base_url.as_str(), "https://api.appstoreconnect.apple.com/");
        assert_eq!(client.config().max_pages, 50);
    }

    #[tokio::test]
    async fn test_client_signs_requests_with_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/apps/123"))
            .and(header_exists("Authorization"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "123", "type": "apps"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = AscClient::builder()
            .base_url(server.uri())
            .credentials(Credentials::new(
                "issuer",
                "KEY123",
                PrivateKeySource::Inline(TEST_PRIVATE_KEY.to_string()),
            ))
            .build()
            .unwrap();

        let result = client.execute(ApiRequest::get("/v1/apps/123")).await.unwrap();
        assert_eq!(result, json!({"data": {"id": "123", "type": "apps"}}));

        let requests = server.received_requests().await.unwrap();
        let auth = requests[0].headers.get("authorization").unwrap().to_str().unwrap();
        assert!(auth.starts_with("Bearer ey"));
    }
}
