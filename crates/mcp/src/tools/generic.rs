// Passthrough tool for endpoints without a dedicated binding

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::endpoint::{error_result, json_result, query_value, ArgumentError};
use crate::tools::{
    json_schema_boolean, json_schema_enum, json_schema_map, json_schema_object,
    json_schema_string, Tool, ToolTier,
};
use anyhow::Result;
use asc_sdk::{ApiExecutor, ApiRequest, HttpMethod};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::debug;

const NAME: &str = "api_request";

/// Sends an arbitrary request to the App Store Connect API.
pub struct ApiRequestTool {
    executor: Arc<dyn ApiExecutor>,
    read_only: bool,
}

impl ApiRequestTool {
    pub fn new(executor: Arc<dyn ApiExecutor>) -> Self {
        Self {
            executor,
            read_only: false,
        }
    }

    /// Restrict the tool to GET requests.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    fn allowed_methods(&self) -> &'static [&'static str] {
        if self.read_only {
            &["GET"]
        } else {
            &["GET", "POST", "PATCH", "DELETE"]
        }
    }

    fn build_request(&self, args: ApiRequestArgs) -> std::result::Result<(ApiRequest, bool), ArgumentError> {
        let method: HttpMethod = args
            .method
            .parse()
            .map_err(|e: asc_sdk::ClientError| ArgumentError::new(NAME, e.to_string()))?;
        if self.read_only && method != HttpMethod::Get {
            return Err(ArgumentError::new(
                NAME,
                format!("{} is not allowed in read-only mode", method),
            ));
        }
        if !args.path.starts_with("/v") {
            return Err(ArgumentError::new(
                NAME,
                format!("path must start with an API version such as /v1, got {:?}", args.path),
            ));
        }
        if args.fetch_all && method != HttpMethod::Get {
            return Err(ArgumentError::new(NAME, "fetch_all is only valid for GET requests"));
        }

        let mut request = ApiRequest::new(method, args.path);
        for (key, value) in args.params.unwrap_or_default() {
            if value.is_object() {
                return Err(ArgumentError::new(
                    NAME,
                    format!("query parameter {:?} must be a string, number or boolean", key),
                ));
            }
            request = request.with_query(key, query_value(&value));
        }
        if let Some(body) = args.body.filter(|b| !b.is_null()) {
            request = request.with_body(body);
        }

        Ok((request, args.fetch_all))
    }
}

#[derive(Debug, Deserialize)]
struct ApiRequestArgs {
    method: String,
    path: String,
    #[serde(default)]
    params: Option<Map<String, Value>>,
    #[serde(default)]
    body: Option<Value>,
    #[serde(default)]
    fetch_all: bool,
}

#[async_trait::async_trait]
impl Tool for ApiRequestTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.to_string(),
            description: "Make an arbitrary request to the App Store Connect API. Use this for \
                          endpoints that have no dedicated tool."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "method": json_schema_enum(self.allowed_methods(), "HTTP method"),
                    "path": json_schema_string("API path starting with the version, e.g. /v1/apps or /v2/inAppPurchases"),
                    "params": json_schema_map(
                        json!({"type": ["string", "number", "boolean"]}),
                        "Query parameters, e.g. {\"filter[app]\": \"123\", \"limit\": 50}"
                    ),
                    "body": {
                        "type": "object",
                        "description": "JSON:API request body for POST, PATCH or relationship DELETE"
                    },
                    "fetch_all": json_schema_boolean("Follow pagination and merge every page (GET only)")
                }),
                vec!["method", "path"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: ApiRequestArgs = serde_json::from_value(arguments)
            .map_err(|e| ArgumentError::new(NAME, e.to_string()))?;
        let (request, fetch_all) = self.build_request(args)?;
        debug!(method = %request.method, path = %request.path, fetch_all, "Passthrough request");

        let response = if fetch_all {
            self.executor.execute_all_pages(request).await
        } else {
            self.executor.execute(request).await
        };

        match response {
            Ok(value) => json_result(&value),
            Err(err) => Ok(error_result(&err)),
        }
    }

    fn tier(&self) -> ToolTier {
        if self.read_only {
            ToolTier::Tier0
        } else {
            ToolTier::Tier2
        }
    }
}
