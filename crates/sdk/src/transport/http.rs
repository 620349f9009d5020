//! HTTP transport for App Store Connect.

use crate::auth::TokenProvider;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::pagination::collect_pages;
use crate::request::{ApiRequest, HttpMethod};
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Executes requests with a bearer token attached.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration and token source.
    pub fn new(config: Arc<ClientConfig>, tokens: Arc<dyn TokenProvider>) -> ClientResult<Self> {
        let client = Client::builder().user_agent(config.user_agent.clone()).build()?;

        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    /// Resolve a path (or an absolute pagination URL) against the base URL.
    fn build_url(&self, path: &str) -> ClientResult<Url> {
        self.config.base_url.join(path).map_err(ClientError::InvalidUrl)
    }

    /// Execute a single request.
    pub async fn execute(&self, request: &ApiRequest) -> ClientResult<Value> {
        let mut url = self.build_url(&request.path)?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }

        self.send(request.method, url, request.body.as_ref()).await
    }

    /// Execute a request and every page after it.
    pub async fn execute_all_pages(&self, request: &ApiRequest) -> ClientResult<Value> {
        let first = self.execute(request).await?;

        collect_pages(first, self.config.max_pages, |next| async move {
            let url = self.build_url(&next)?;
            if url.origin() != self.config.base_url.origin() {
                warn!(next = %url, "Pagination link leaves the API host");
                return Err(ClientError::ForeignNextLink(url.to_string()));
            }
            self.send(HttpMethod::Get, url, None).await
        })
        .await
    }

    async fn send(&self, method: HttpMethod, url: Url, body: Option<&Value>) -> ClientResult<Value> {
        let token = self.tokens.bearer_token().await?;
        debug!(method = %method, url = %url, "App Store Connect request");

        let mut builder = self
            .client
            .request(method.to_reqwest(), url.clone())
            .bearer_auth(token);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(method = %method, url = %url, status = status.as_u16(), "App Store Connect request failed");
            return Err(ClientError::from_response(status, &text));
        }

        parse_body(&text)
    }
}

/// Successful bodies are JSON; an empty body (204, most deletes) becomes
/// `{"data": null}`.
fn parse_body(text: &str) -> ClientResult<Value> {
    if text.trim().is_empty() {
        return Ok(json!({ "data": null }));
    }
    Ok(serde_json::from_str(text)?)
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_transport(base_url: &str) -> HttpTransport {
        let config = ClientConfig::new(Url::parse(base_url).unwrap());
        HttpTransport::new(Arc::new(config), Arc::new(StaticToken::new("test-token"))).unwrap()
    }

    #[tokio::test]
    async fn test_get_returns_body_unchanged() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/apps/123"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data":{"type":"apps","id":"123","attributes":{"name":"Demo"}}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let result = transport.execute(&ApiRequest::get("/v1/apps/123")).await.unwrap();

        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"data":{"type":"apps","id":"123","attributes":{"name":"Demo"}}}"#
        );
    }

    #[tokio::test]
    async fn test_query_params_are_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/builds"))
            .and(query_param("filter[app]", "42"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let request = ApiRequest::get("/v1/builds")
            .with_query("filter[app]", "42")
            .with_query("limit", "10");

        let result = transport.execute(&request).await.unwrap();
        assert_eq!(result, json!({"data": []}));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start().await;
        let body = json!({"data": {"type": "betaGroups", "attributes": {"name": "QA"}}});

        Mock::given(method("POST"))
            .and(path("/v1/betaGroups"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(&body))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"data": {"type": "betaGroups", "id": "g1"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let result = transport
            .execute(&ApiRequest::post("/v1/betaGroups", body))
            .await
            .unwrap();

        assert_eq!(result["data"]["id"], "g1");
    }

    #[tokio::test]
    async fn test_delete_no_content() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/betaGroups/g1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let result = transport
            .execute(&ApiRequest::delete("/v1/betaGroups/g1"))
            .await
            .unwrap();

        assert_eq!(result, json!({"data": null}));

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_delete_with_linkage_body() {
        let server = MockServer::start().await;
        let body = json!({"data": [{"type": "betaTesters", "id": "t1"}]});

        Mock::given(method("DELETE"))
            .and(path("/v1/betaGroups/g1/relationships/betaTesters"))
            .and(body_json(&body))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let request = ApiRequest::delete("/v1/betaGroups/g1/relationships/betaTesters")
            .with_body(body);

        assert_eq!(transport.execute(&request).await.unwrap(), json!({"data": null}));
    }

    #[tokio::test]
    async fn test_jsonapi_error_document() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/apps/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{
                    "status": "404",
                    "code": "NOT_FOUND",
                    "title": "The specified resource does not exist",
                    "detail": "There is no resource of type 'apps' with id 'missing'"
                }]
            })))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let err = transport
            .execute(&ApiRequest::get("/v1/apps/missing"))
            .await
            .unwrap_err();

        match err {
            ClientError::Api { status, errors } => {
                assert_eq!(status, 404);
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code, "NOT_FOUND");
                assert_eq!(errors[0].status.as_deref(), Some("404"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/apps"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let err = transport.execute(&ApiRequest::get("/v1/apps")).await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        let errors = err.api_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "HTTP_503");
        assert_eq!(errors[0].title, "Service Unavailable");
        assert_eq!(errors[0].detail.as_deref(), Some("upstream unavailable"));
    }

    #[tokio::test]
    async fn test_pagination_follows_exact_next_url() {
        let server = MockServer::start().await;
        let next = format!("{}/v1/apps?cursor=AAE&limit=2", server.uri());

        Mock::given(method("GET"))
            .and(path("/v1/apps"))
            .and(query_param("cursor", "AAE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"type": "apps", "id": "c"}],
                "links": {"self": next.clone()}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/apps"))
            .and(query_param("limit", "200"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"type": "apps", "id": "a"}, {"type": "apps", "id": "b"}],
                "links": {"self": "first", "next": next.clone()}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let request = ApiRequest::get("/v1/apps").with_query("limit", "200");
        let result = transport.execute_all_pages(&request).await.unwrap();

        let ids: Vec<_> = result["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(result["links"].get("next").is_none());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].url.path(), "/v1/apps");
        assert_eq!(requests[1].url.query(), Some("cursor=AAE&limit=2"));
    }

    #[tokio::test]
    async fn test_pagination_refuses_foreign_next_url() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/apps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"type": "apps", "id": "a"}],
                "links": {"next": "https://elsewhere.example/v1/apps?cursor=AAE"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let err = transport
            .execute_all_pages(&ApiRequest::get("/v1/apps"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ForeignNextLink(ref url) if url.contains("elsewhere.example")));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_pagination_second_page_failure() {
        let server = MockServer::start().await;
        let next = format!("{}/v1/builds?cursor=Mg", server.uri());

        Mock::given(method("GET"))
            .and(path("/v1/builds"))
            .and(query_param("cursor", "Mg"))
            .respond_with(ResponseTemplate::new(500).set_body_string(""))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/builds"))
            .and(query_param("limit", "200"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"type": "builds", "id": "a"}, {"type": "builds", "id": "b"}],
                "links": {"next": next}
            })))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let request = ApiRequest::get("/v1/builds").with_query("limit", "200");
        let err = transport.execute_all_pages(&request).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(err.api_errors()[0].title, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_build_url() {
        let transport = create_transport("http://localhost:8080");

        let url = transport.build_url("/v1/apps").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/apps");

        let absolute = transport
            .build_url("https://api.appstoreconnect.apple.com/v1/apps?cursor=x")
            .unwrap();
        assert_eq!(absolute.as_str(), "https://api.appstoreconnect.apple.com/v1/apps?cursor=x");
    }
}
