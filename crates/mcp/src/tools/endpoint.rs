//! Declarative endpoint descriptors and the tool that evaluates them.
//!
//! Nearly every App Store Connect tool is the same few steps: check the
//! arguments, substitute ids into a path, map the rest onto query parameters or
//! a JSON:API body, call the API, print the result. An [`Endpoint`] states the
//! per-tool differences as data; [`EndpointTool`] does the steps.

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::registry::{
    json_schema_array, json_schema_boolean, json_schema_enum, json_schema_map,
    json_schema_number, json_schema_object, json_schema_string, Tool, ToolTier,
};
use anyhow::Result;
use asc_sdk::{ApiExecutor, ApiRequest, ClientError, HttpMethod};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Arguments that do not match a tool's input schema.
#[derive(Debug, thiserror::Error)]
#[error("Invalid arguments for {tool}: {message}")]
pub struct ArgumentError {
    pub tool: String,
    pub message: String,
}

impl ArgumentError {
    pub fn new(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// JSON shape accepted for a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    String,
    Number { min: Option<i64>, max: Option<i64> },
    Boolean,
    Enum(&'static [&'static str]),
    StringArray,
    ObjectArray,
    StringMap,
}

/// Default applied when an optional field is omitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Str(&'static str),
    Bool(bool),
    Int(i64),
}

impl Literal {
    fn to_value(self) -> Value {
        match self {
            Self::Str(s) => json!(s),
            Self::Bool(b) => json!(b),
            Self::Int(i) => json!(i),
        }
    }
}

/// Where a field's value ends up in the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    /// Only substituted into the path template.
    Path,
    /// Query parameter under the given key.
    Query(&'static str),
    /// `data.id` of the request body (and usually a path placeholder too).
    ResourceId,
    /// `data.attributes.<key>`.
    Attribute(&'static str),
    /// `data.relationships.<rel>` pointing at one resource.
    ToOne { rel: &'static str, kind: &'static str },
    /// Like `ToOne`, but an empty string clears the relationship.
    NullableToOne { rel: &'static str, kind: &'static str },
    /// `data.relationships.<rel>` pointing at many resources. Omitted when
    /// empty unless the field is required.
    ToMany { rel: &'static str, kind: &'static str },
    /// The whole `data` array of a relationship endpoint.
    Linkage(&'static str),
    /// Follow pagination when true.
    FetchAll,
}

/// One input field of a tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<Literal>,
    pub role: Role,
}

impl Field {
    /// An optional field.
    pub const fn new(name: &'static str, kind: FieldKind, role: Role, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
            default: None,
            role,
        }
    }

    /// Required id substituted into the path.
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::String, Role::Path, description).required()
    }

    /// Required id that is both a path placeholder and `data.id`.
    pub const fn id(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::String, Role::ResourceId, description).required()
    }

    /// Optional string query parameter.
    pub const fn query(name: &'static str, key: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::String, Role::Query(key), description)
    }

    /// Optional attribute whose key equals the field name.
    pub const fn attr(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self::new(name, kind, Role::Attribute(name), description)
    }

    /// Required to-one relationship.
    pub const fn to_one(
        name: &'static str,
        rel: &'static str,
        kind: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, FieldKind::String, Role::ToOne { rel, kind }, description).required()
    }

    /// Optional to-one relationship that an empty string clears.
    pub const fn nullable_to_one(
        name: &'static str,
        rel: &'static str,
        kind: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, FieldKind::String, Role::NullableToOne { rel, kind }, description)
    }

    /// Optional to-many relationship.
    pub const fn to_many(
        name: &'static str,
        rel: &'static str,
        kind: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, FieldKind::StringArray, Role::ToMany { rel, kind }, description)
    }

    /// Required id list forming the body of a relationship endpoint.
    pub const fn linkage(name: &'static str, kind: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::StringArray, Role::Linkage(kind), description).required()
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub const fn with_default(mut self, default: Literal) -> Self {
        self.default = Some(default);
        self
    }

    fn schema(&self) -> Value {
        let mut schema = match self.kind {
            FieldKind::String => json_schema_string(self.description),
            FieldKind::Number { min, max } => {
                let mut schema = json_schema_number(self.description);
                if let Some(min) = min {
                    schema["minimum"] = json!(min);
                }
                if let Some(max) = max {
                    schema["maximum"] = json!(max);
                }
                schema
            }
            FieldKind::Boolean => json_schema_boolean(self.description),
            FieldKind::Enum(values) => json_schema_enum(values, self.description),
            FieldKind::StringArray => json_schema_array(json!({"type": "string"}), self.description),
            FieldKind::ObjectArray => json_schema_array(json!({"type": "object"}), self.description),
            FieldKind::StringMap => json_schema_map(json!({"type": "string"}), self.description),
        };
        if let Some(default) = self.default {
            schema["default"] = default.to_value();
        }
        schema
    }

    /// Type, enum and bounds check of a present value.
    fn check(&self, value: &Value) -> std::result::Result<(), String> {
        let ok = match self.kind {
            FieldKind::String => value.is_string(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Number { min, max } => {
                let Some(n) = value.as_f64() else {
                    return Err(format!("`{}` must be a number", self.name));
                };
                if let Some(min) = min {
                    if n < min as f64 {
                        return Err(format!("`{}` must be at least {}", self.name, min));
                    }
                }
                if let Some(max) = max {
                    if n > max as f64 {
                        return Err(format!("`{}` must be at most {}", self.name, max));
                    }
                }
                true
            }
            FieldKind::Enum(values) => {
                let Some(s) = value.as_str() else {
                    return Err(format!("`{}` must be a string", self.name));
                };
                if !values.contains(&s) {
                    return Err(format!(
                        "`{}` must be one of {}, got {:?}",
                        self.name,
                        values.join(", "),
                        s
                    ));
                }
                true
            }
            FieldKind::StringArray => value
                .as_array()
                .map_or(false, |items| items.iter().all(Value::is_string)),
            FieldKind::ObjectArray => value
                .as_array()
                .map_or(false, |items| items.iter().all(Value::is_object)),
            FieldKind::StringMap => value
                .as_object()
                .map_or(false, |map| map.values().all(Value::is_string)),
        };

        if !ok {
            return Err(format!("`{}` must be {}", self.name, self.kind.noun()));
        }
        if matches!(self.role, Role::Path | Role::ResourceId) {
            if let Some(segment) = value.as_str() {
                check_path_segment(self.name, segment)?;
            }
        }
        Ok(())
    }
}

/// A path value must stay a single non-empty segment.
fn check_path_segment(name: &str, segment: &str) -> std::result::Result<(), String> {
    if segment.trim().is_empty() {
        return Err(format!("`{}` must not be empty", name));
    }
    if segment == "." || segment == ".." || segment.contains(['/', '\\', '?', '#']) {
        return Err(format!("`{}` must be a single path segment, got {:?}", name, segment));
    }
    Ok(())
}

impl FieldKind {
    fn noun(&self) -> &'static str {
        match self {
            Self::String | Self::Enum(_) => "a string",
            Self::Number { .. } => "a number",
            Self::Boolean => "a boolean",
            Self::StringArray => "an array of strings",
            Self::ObjectArray => "an array of objects",
            Self::StringMap => "an object of strings",
        }
    }
}

/// Optional pagination limit shared by list endpoints.
pub const LIMIT: Field = Field::new(
    "limit",
    FieldKind::Number { min: Some(1), max: Some(200) },
    Role::Query("limit"),
    "Maximum number of results per page (1-200)",
);

/// Switch that makes a list endpoint follow every page.
pub const FETCH_ALL: Field = Field::new(
    "fetch_all",
    FieldKind::Boolean,
    Role::FetchAll,
    "Follow pagination and return every page merged into one response",
);

/// Request body shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body {
    Empty,
    /// `{"data": {"type": <kind>, ...}}`
    Resource(&'static str),
    /// `{"data": [{"type", "id"}, ...]}` from the linkage field.
    Linkage,
}

/// What the tool prints on success.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Output {
    /// The response envelope as pretty JSON.
    Json,
    /// `{"success":true,"message":...}` with `{field}` and `{#field}`
    /// placeholders filled in.
    Ack(&'static str),
}

/// Declarative description of one tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub fields: &'static [Field],
    pub fixed_query: &'static [(&'static str, &'static str)],
    pub body: Body,
    pub output: Output,
}

impl Endpoint {
    const fn new(
        name: &'static str,
        method: HttpMethod,
        path: &'static str,
        body: Body,
        output: Output,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            method,
            path,
            fields: &[],
            fixed_query: &[],
            body,
            output,
        }
    }

    /// GET returning the response.
    pub const fn get(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(name, HttpMethod::Get, path, Body::Empty, Output::Json, description)
    }

    /// POST of a new resource of the given type.
    pub const fn create(
        name: &'static str,
        path: &'static str,
        kind: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, HttpMethod::Post, path, Body::Resource(kind), Output::Json, description)
    }

    /// PATCH of an existing resource of the given type.
    pub const fn update(
        name: &'static str,
        path: &'static str,
        kind: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, HttpMethod::Patch, path, Body::Resource(kind), Output::Json, description)
    }

    /// DELETE of a resource, acknowledged with `message`.
    pub const fn delete(
        name: &'static str,
        path: &'static str,
        message: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, HttpMethod::Delete, path, Body::Empty, Output::Ack(message), description)
    }

    /// POST or DELETE on a relationship endpoint, acknowledged with `message`.
    pub const fn link(
        name: &'static str,
        method: HttpMethod,
        path: &'static str,
        message: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, method, path, Body::Linkage, Output::Ack(message), description)
    }

    pub const fn fields(mut self, fields: &'static [Field]) -> Self {
        self.fields = fields;
        self
    }

    /// Query parameters sent on every call.
    pub const fn fixed_query(mut self, params: &'static [(&'static str, &'static str)]) -> Self {
        self.fixed_query = params;
        self
    }

    pub fn tier(&self) -> ToolTier {
        match self.method {
            HttpMethod::Get => ToolTier::Tier0,
            HttpMethod::Post | HttpMethod::Patch => ToolTier::Tier1,
            HttpMethod::Delete => ToolTier::Tier2,
        }
    }

    pub fn schema(&self) -> ToolSchema {
        let mut properties = Map::new();
        for field in self.fields {
            properties.insert(field.name.to_string(), field.schema());
        }
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();

        ToolSchema {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: json_schema_object(Value::Object(properties), required),
        }
    }

    /// `{name}` placeholders in the path template.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Validate raw arguments and fill in defaults. Nulls count as absent and
    /// names that are not fields are ignored.
    pub fn resolve(&self, arguments: Value) -> std::result::Result<Map<String, Value>, ArgumentError> {
        let mut raw = match arguments {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            other => {
                return Err(ArgumentError::new(
                    self.name,
                    format!("expected an object, got {}", other),
                ))
            }
        };

        let mut resolved = Map::new();
        for field in self.fields {
            match raw.remove(field.name).filter(|v| !v.is_null()) {
                Some(value) => {
                    field
                        .check(&value)
                        .map_err(|message| ArgumentError::new(self.name, message))?;
                    resolved.insert(field.name.to_string(), value);
                }
                None => {
                    if let Some(default) = field.default {
                        resolved.insert(field.name.to_string(), default.to_value());
                    } else if field.required {
                        return Err(ArgumentError::new(
                            self.name,
                            format!("missing required field `{}`", field.name),
                        ));
                    }
                }
            }
        }
        Ok(resolved)
    }

    /// Build the request for resolved arguments.
    pub fn build_request(&self, args: &Map<String, Value>) -> ApiRequest {
        let mut request = ApiRequest::new(self.method, self.interpolate_path(args));

        for field in self.fields {
            if let (Role::Query(key), Some(value)) = (field.role, args.get(field.name)) {
                request = request.with_query(key, query_value(value));
            }
        }
        for (key, value) in self.fixed_query {
            request = request.with_query(*key, *value);
        }

        match self.body {
            Body::Empty => request,
            Body::Resource(kind) => request.with_body(self.resource_body(kind, args)),
            Body::Linkage => request.with_body(self.linkage_body(args)),
        }
    }

    /// Whether the caller asked for every page.
    pub fn wants_all_pages(&self, args: &Map<String, Value>) -> bool {
        self.fields.iter().any(|field| {
            field.role == Role::FetchAll && args.get(field.name).and_then(Value::as_bool) == Some(true)
        })
    }

    fn interpolate_path(&self, args: &Map<String, Value>) -> String {
        let mut path = self.path.to_string();
        for name in self.placeholders() {
            let value = args.get(name).map(query_value).unwrap_or_default();
            path = path.replace(&format!("{{{}}}", name), &value);
        }
        path
    }

    fn resource_body(&self, kind: &str, args: &Map<String, Value>) -> Value {
        let mut data = Map::new();
        data.insert("type".to_string(), json!(kind));

        let mut attributes = Map::new();
        let mut relationships = Map::new();
        let mut declares_attributes = false;

        for field in self.fields {
            if let Role::Attribute(_) = field.role {
                declares_attributes = true;
            }
            let Some(value) = args.get(field.name) else {
                continue;
            };

            match field.role {
                Role::ResourceId => {
                    data.insert("id".to_string(), value.clone());
                }
                Role::Attribute(key) => {
                    attributes.insert(key.to_string(), value.clone());
                }
                Role::ToOne { rel, kind } => {
                    relationships.insert(rel.to_string(), json!({"data": {"type": kind, "id": value}}));
                }
                Role::NullableToOne { rel, kind } => {
                    let linkage = match value.as_str() {
                        Some("") => Value::Null,
                        _ => json!({"type": kind, "id": value}),
                    };
                    relationships.insert(rel.to_string(), json!({ "data": linkage }));
                }
                Role::ToMany { rel, kind } => {
                    let ids = value.as_array().map(Vec::as_slice).unwrap_or_default();
                    if !ids.is_empty() || field.required {
                        relationships.insert(rel.to_string(), json!({ "data": linkage(kind, ids) }));
                    }
                }
                Role::Path | Role::Query(_) | Role::Linkage(_) | Role::FetchAll => {}
            }
        }

        if declares_attributes {
            data.insert("attributes".to_string(), Value::Object(attributes));
        }
        if !relationships.is_empty() {
            data.insert("relationships".to_string(), Value::Object(relationships));
        }
        json!({ "data": data })
    }

    fn linkage_body(&self, args: &Map<String, Value>) -> Value {
        let data = self
            .fields
            .iter()
            .find_map(|field| match field.role {
                Role::Linkage(kind) => {
                    let ids = args.get(field.name)?.as_array()?;
                    Some(linkage(kind, ids))
                }
                _ => None,
            })
            .unwrap_or_default();
        json!({ "data": data })
    }

    /// Fill `{field}` and `{#field}` placeholders of an acknowledgment.
    fn acknowledgment(&self, template: &str, args: &Map<String, Value>) -> String {
        let mut message = template.to_string();
        for field in self.fields {
            let count = format!("{{#{}}}", field.name);
            if message.contains(&count) {
                let n = args
                    .get(field.name)
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len);
                message = message.replace(&count, &n.to_string());
            }
            let plain = format!("{{{}}}", field.name);
            if message.contains(&plain) {
                let value = args.get(field.name).map(query_value).unwrap_or_default();
                message = message.replace(&plain, &value);
            }
        }
        message
    }
}

fn linkage(kind: &str, ids: &[Value]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| json!({"type": kind, "id": id}))
            .collect(),
    )
}

/// Render a value the way it appears in a URL. Integral numbers print without
/// a fractional part and arrays become comma separated lists.
pub(crate) fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                (f as i64).to_string()
            }
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(query_value).collect::<Vec<_>>().join(","),
        Value::Null => String::new(),
        Value::Object(_) => value.to_string(),
    }
}

/// Success result carrying the response envelope as 2-space pretty JSON.
pub(crate) fn json_result(value: &Value) -> Result<CallToolResult> {
    Ok(CallToolResult::text(serde_json::to_string_pretty(value)?))
}

/// Success result for calls whose response body is not interesting.
pub(crate) fn ack_result(message: &str) -> Result<CallToolResult> {
    let body = json!({"success": true, "message": message});
    Ok(CallToolResult::text(serde_json::to_string(&body)?))
}

/// Failed result for a client error. API errors carry their error list.
pub(crate) fn error_result(err: &ClientError) -> CallToolResult {
    let errors = err.api_errors();
    let text = match serde_json::to_string_pretty(errors) {
        Ok(list) if !errors.is_empty() => format!("{}\n{}", err, list),
        _ => err.to_string(),
    };
    CallToolResult::error(text)
}

/// A tool backed by an [`Endpoint`] descriptor.
pub struct EndpointTool {
    endpoint: &'static Endpoint,
    executor: Arc<dyn ApiExecutor>,
}

impl EndpointTool {
    pub fn new(endpoint: &'static Endpoint, executor: Arc<dyn ApiExecutor>) -> Self {
        Self { endpoint, executor }
    }

    pub fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }
}

#[async_trait::async_trait]
impl Tool for EndpointTool {
    fn schema(&self) -> ToolSchema {
        self.endpoint.schema()
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let endpoint = self.endpoint;
        let args = endpoint.resolve(arguments)?;
        let request = endpoint.build_request(&args);
        debug!(tool = endpoint.name, method = %request.method, path = %request.path, "Calling endpoint");

        let response = if endpoint.wants_all_pages(&args) {
            self.executor.execute_all_pages(request).await
        } else {
            self.executor.execute(request).await
        };

        match response {
            Ok(value) => match endpoint.output {
                Output::Json => json_result(&value),
                Output::Ack(template) => ack_result(&endpoint.acknowledgment(template, &args)),
            },
            Err(err) => Ok(error_result(&err)),
        }
    }

    fn tier(&self) -> ToolTier {
        self.endpoint.tier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::RecordingExecutor;
    use asc_sdk::ApiErrorEntry;

    const LIST_BUILDS: Endpoint = Endpoint::get("list_builds", "/v1/builds", "List builds")
        .fields(&[
            Field::query("app_id", "filter[app]", "App"),
            Field::query("sort", "sort", "Sort").with_default(Literal::Str("-uploadedDate")),
            Field::new(
                "processing_state",
                FieldKind::Enum(&["PROCESSING", "VALID"]),
                Role::Query("filter[processingState]"),
                "State",
            ),
            LIMIT,
            FETCH_ALL,
        ])
        .fixed_query(&[("include", "preReleaseVersion")]);

    const CREATE_GROUP: Endpoint =
        Endpoint::create("create_beta_group", "/v1/betaGroups", "betaGroups", "Create group").fields(&[
            Field::to_one("app_id", "app", "apps", "App"),
            Field::attr("name", FieldKind::String, "Name").required(),
            Field::attr("publicLinkEnabled", FieldKind::Boolean, "Public link")
                .with_default(Literal::Bool(false)),
            Field::attr("publicLinkLimit", FieldKind::Number { min: Some(1), max: Some(10000) }, "Limit"),
            Field::to_many("tester_ids", "betaTesters", "betaTesters", "Testers"),
        ]);

    const UPDATE_INFO: Endpoint =
        Endpoint::update("update_app_info", "/v1/appInfos/{id}", "appInfos", "Update").fields(&[
            Field::id("id", "App info"),
            Field::nullable_to_one("primaryCategory", "primaryCategory", "appCategories", "Category"),
            Field::nullable_to_one("secondaryCategory", "secondaryCategory", "appCategories", "Category"),
        ]);

    const REMOVE_TESTERS: Endpoint = Endpoint::link(
        "remove_tester_from_beta_group",
        HttpMethod::Delete,
        "/v1/betaGroups/{beta_group_id}/relationships/betaTesters",
        "Removed {#tester_ids} tester(s) from beta group {beta_group_id}",
        "Remove testers",
    )
    .fields(&[
        Field::path("beta_group_id", "Group"),
        Field::linkage("tester_ids", "betaTesters", "Testers"),
    ]);

    const DELETE_PROFILE: Endpoint = Endpoint::delete(
        "delete_profile",
        "/v1/profiles/{id}",
        "Deleted profile {id}",
        "Delete a profile",
    )
    .fields(&[Field::path("id", "Profile")]);

    #[test]
    fn test_schema_lists_fields_in_order() {
        let schema = LIST_BUILDS.schema();
        let properties: Vec<&String> = schema.input_schema["properties"]
            .as_object()
            .unwrap()
            .keys()
            .collect();

        assert_eq!(
            properties,
            vec!["app_id", "sort", "processing_state", "limit", "fetch_all"]
        );
        assert_eq!(schema.input_schema["properties"]["limit"]["maximum"], 200);
        assert_eq!(schema.input_schema["properties"]["sort"]["default"], "-uploadedDate");
        assert_eq!(schema.input_schema["required"], json!([]));
        assert_eq!(CREATE_GROUP.schema().input_schema["required"], json!(["app_id", "name"]));
    }

    #[test]
    fn test_query_building() {
        let args = LIST_BUILDS
            .resolve(json!({"app_id": "42", "limit": 10, "processing_state": "VALID"}))
            .unwrap();
        let request = LIST_BUILDS.build_request(&args);

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/v1/builds");
        assert_eq!(request.query["filter[app]"], "42");
        assert_eq!(request.query["limit"], "10");
        assert_eq!(request.query["sort"], "-uploadedDate");
        assert_eq!(request.query["include"], "preReleaseVersion");
        assert_eq!(request.query["filter[processingState]"], "VALID");
        assert!(request.body.is_none());
        assert!(!LIST_BUILDS.wants_all_pages(&args));
    }

    #[test]
    fn test_empty_query_values_are_skipped() {
        let args = LIST_BUILDS.resolve(json!({"app_id": "", "sort": ""})).unwrap();
        let request = LIST_BUILDS.build_request(&args);

        assert!(!request.query.contains_key("filter[app]"));
        assert!(!request.query.contains_key("sort"));
    }

    #[test]
    fn test_validation_errors() {
        let err = LIST_BUILDS.resolve(json!({"limit": 500})).unwrap_err();
        assert!(err.message.contains("at most 200"));

        let err = LIST_BUILDS.resolve(json!({"limit": "ten"})).unwrap_err();
        assert!(err.message.contains("must be a number"));

        let err = LIST_BUILDS.resolve(json!({"processing_state": "DONE"})).unwrap_err();
        assert!(err.message.contains("PROCESSING, VALID"));

        let err = CREATE_GROUP.resolve(json!({"app_id": "1"})).unwrap_err();
        assert_eq!(err.tool, "create_beta_group");
        assert!(err.message.contains("`name`"));

        let err = REMOVE_TESTERS
            .resolve(json!({"beta_group_id": "g", "tester_ids": [1, 2]}))
            .unwrap_err();
        assert!(err.message.contains("array of strings"));

        assert!(LIST_BUILDS.resolve(json!("nope")).is_err());
    }

    #[test]
    fn test_path_values_must_be_single_segments() {
        for bad in ["", "  ", "..", ".", "../x", "a/b", "a?b=1", "a#b"] {
            let err = DELETE_PROFILE.resolve(json!({ "id": bad })).unwrap_err();
            assert!(err.message.contains("`id`"), "accepted {:?}", bad);
        }

        let args = DELETE_PROFILE.resolve(json!({"id": "ABC-123_x.y"})).unwrap();
        assert_eq!(DELETE_PROFILE.build_request(&args).path, "/v1/profiles/ABC-123_x.y");
    }

    #[test]
    fn test_resource_body() {
        let args = CREATE_GROUP
            .resolve(json!({"app_id": "123", "name": "QA", "tester_ids": []}))
            .unwrap();
        let request = CREATE_GROUP.build_request(&args);

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            serde_json::to_string(&request.body.unwrap()).unwrap(),
            r#"{"data":{"type":"betaGroups","attributes":{"name":"QA","publicLinkEnabled":false},"relationships":{"app":{"data":{"type":"apps","id":"123"}}}}}"#
        );
    }

    #[test]
    fn test_to_many_relationship() {
        let args = CREATE_GROUP
            .resolve(json!({"app_id": "1", "name": "QA", "tester_ids": ["t1", "t2"], "publicLinkLimit": 50}))
            .unwrap();
        let body = CREATE_GROUP.build_request(&args).body.unwrap();

        assert_eq!(body["data"]["attributes"]["publicLinkLimit"], 50);
        assert_eq!(
            body["data"]["relationships"]["betaTesters"]["data"],
            json!([{"type": "betaTesters", "id": "t1"}, {"type": "betaTesters", "id": "t2"}])
        );
    }

    #[test]
    fn test_patch_with_nullable_relationship() {
        let args = UPDATE_INFO
            .resolve(json!({"id": "info-1", "primaryCategory": "GAMES", "secondaryCategory": ""}))
            .unwrap();
        let request = UPDATE_INFO.build_request(&args);

        assert_eq!(request.path, "/v1/appInfos/info-1");
        assert_eq!(
            request.body.unwrap(),
            json!({
                "data": {
                    "type": "appInfos",
                    "id": "info-1",
                    "relationships": {
                        "primaryCategory": {"data": {"type": "appCategories", "id": "GAMES"}},
                        "secondaryCategory": {"data": null}
                    }
                }
            })
        );
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(REMOVE_TESTERS.placeholders(), vec!["beta_group_id"]);
        assert!(LIST_BUILDS.placeholders().is_empty());
    }

    #[test]
    fn test_tiers() {
        assert_eq!(LIST_BUILDS.tier(), ToolTier::Tier0);
        assert_eq!(CREATE_GROUP.tier(), ToolTier::Tier1);
        assert_eq!(UPDATE_INFO.tier(), ToolTier::Tier1);
        assert_eq!(DELETE_PROFILE.tier(), ToolTier::Tier2);
    }

    #[test]
    fn test_query_value_rendering() {
        assert_eq!(query_value(&json!(50)), "50");
        assert_eq!(query_value(&json!(50.0)), "50");
        assert_eq!(query_value(&json!(true)), "true");
        assert_eq!(query_value(&json!(["a", "b"])), "a,b");
    }

    #[tokio::test]
    async fn test_linkage_delete_sends_body_and_acknowledges() {
        static TOOL_ENDPOINT: Endpoint = REMOVE_TESTERS;
        let executor = Arc::new(RecordingExecutor::new());
        let tool = EndpointTool::new(&TOOL_ENDPOINT, executor.clone());

        let result = tool
            .execute(json!({"beta_group_id": "g1", "tester_ids": ["t1", "t2"]}))
            .await
            .unwrap();

        assert_eq!(
            result.text_content(),
            r#"{"success":true,"message":"Removed 2 tester(s) from beta group g1"}"#
        );
        let request = executor.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/v1/betaGroups/g1/relationships/betaTesters");
        assert_eq!(
            request.body.unwrap(),
            json!({"data": [{"type": "betaTesters", "id": "t1"}, {"type": "betaTesters", "id": "t2"}]})
        );
    }

    #[tokio::test]
    async fn test_resource_delete_has_no_body() {
        static TOOL_ENDPOINT: Endpoint = DELETE_PROFILE;
        let executor = Arc::new(RecordingExecutor::new());
        executor.respond_with(Ok(json!({"data": null})));
        let tool = EndpointTool::new(&TOOL_ENDPOINT, executor.clone());

        let result = tool.execute(json!({"id": "P1"})).await.unwrap();

        assert_eq!(result.is_error, None);
        assert!(result.text_content().contains("Deleted profile P1"));
        let request = executor.last_request();
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_uses_pagination() {
        static TOOL_ENDPOINT: Endpoint = LIST_BUILDS;
        let executor = Arc::new(RecordingExecutor::new());
        let tool = EndpointTool::new(&TOOL_ENDPOINT, executor.clone());

        tool.execute(json!({"fetch_all": true})).await.unwrap();
        tool.execute(json!({"fetch_all": false})).await.unwrap();

        assert_eq!(executor.paged_flags(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_api_error_becomes_error_result() {
        static TOOL_ENDPOINT: Endpoint = DELETE_PROFILE;
        let executor = Arc::new(RecordingExecutor::new());
        executor.respond_with(Err(ClientError::Api {
            status: 409,
            errors: vec![ApiErrorEntry {
                id: None,
                status: Some("409".to_string()),
                code: "STATE_ERROR".to_string(),
                title: "The request cannot be fulfilled because of the state of another resource."
                    .to_string(),
                detail: None,
                source: None,
            }],
        }));
        let tool = EndpointTool::new(&TOOL_ENDPOINT, executor);

        let result = tool.execute(json!({"id": "P1"})).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        let text = result.text_content();
        assert!(text.starts_with("Error: API error (status 409)"));
        assert!(text.contains("\"code\": \"STATE_ERROR\""));
    }

    #[tokio::test]
    async fn test_invalid_arguments_are_errors() {
        static TOOL_ENDPOINT: Endpoint = DELETE_PROFILE;
        let executor = Arc::new(RecordingExecutor::new());
        let tool = EndpointTool::new(&TOOL_ENDPOINT, executor.clone());

        let err = tool.execute(json!({})).await.unwrap_err();

        assert!(err.downcast_ref::<ArgumentError>().is_some());
        assert_eq!(executor.request_count(), 0);
    }
}
