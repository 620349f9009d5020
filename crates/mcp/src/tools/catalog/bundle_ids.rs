//! Bundle identifiers and their capabilities.

use super::apps::PLATFORMS;
use crate::tools::endpoint::{Endpoint, Field, FieldKind, Role, LIMIT};

const BUNDLE_PLATFORMS: &[&str] = &["IOS", "MAC_OS", "UNIVERSAL"];

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_bundle_ids",
        "/v1/bundleIds",
        "List registered bundle IDs, optionally filtered by identifier, name or platform.",
    )
    .fields(&[
        Field::query("filter_identifier", "filter[identifier]", "Filter by bundle identifier (e.g., com.example.app)"),
        Field::query("filter_name", "filter[name]", "Filter by bundle ID name"),
        Field::new(
            "filter_platform",
            FieldKind::Enum(PLATFORMS),
            Role::Query("filter[platform]"),
            "Filter by platform",
        ),
        Field::query("include", "include", "Comma-separated includes (e.g., app,bundleIdCapabilities,profiles)"),
        LIMIT,
    ]),
    Endpoint::create(
        "register_bundle_id",
        "/v1/bundleIds",
        "bundleIds",
        "Register a new bundle ID with the developer account.",
    )
    .fields(&[
        Field::attr("identifier", FieldKind::String, "The bundle identifier (e.g., com.example.app)").required(),
        Field::attr("name", FieldKind::String, "A display name for the bundle ID").required(),
        Field::attr("platform", FieldKind::Enum(BUNDLE_PLATFORMS), "Platform of the bundle ID").required(),
        Field::attr("seedId", FieldKind::String, "Team seed ID (App ID prefix)"),
    ]),
    Endpoint::get(
        "list_bundle_id_capabilities",
        "/v1/bundleIds/{bundle_id}/bundleIdCapabilities",
        "List capabilities enabled for a bundle ID.",
    )
    .fields(&[Field::path("bundle_id", "The bundle ID resource ID"), LIMIT]),
    Endpoint::create(
        "enable_bundle_id_capability",
        "/v1/bundleIdCapabilities",
        "bundleIdCapabilities",
        "Enable a capability (e.g., PUSH_NOTIFICATIONS, ICLOUD, APP_GROUPS) for a bundle ID.",
    )
    .fields(&[
        Field::to_one("bundle_id", "bundleId", "bundleIds", "The bundle ID resource ID"),
        Field::attr(
            "capabilityType",
            FieldKind::String,
            "Capability type (e.g., PUSH_NOTIFICATIONS, ICLOUD, APP_GROUPS, IN_APP_PURCHASE)",
        )
        .required(),
        Field::attr(
            "settings",
            FieldKind::ObjectArray,
            "Capability settings objects, as accepted by the API",
        ),
    ]),
    Endpoint::delete(
        "disable_bundle_id_capability",
        "/v1/bundleIdCapabilities/{capability_id}",
        "Disabled capability {capability_id}",
        "Disable a capability for a bundle ID.",
    )
    .fields(&[Field::path("capability_id", "The bundle ID capability ID to disable")]),
];
