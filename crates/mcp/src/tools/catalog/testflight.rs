//! TestFlight beta groups, beta testers and builds.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, Literal, Role, FETCH_ALL, LIMIT};
use asc_sdk::HttpMethod;

const PROCESSING_STATES: &[&str] = &["PROCESSING", "FAILED", "INVALID", "VALID"];

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get("list_beta_groups", "/v1/betaGroups", "List beta groups for an app.").fields(&[
        Field::new(
            "app_id",
            FieldKind::String,
            Role::Query("filter[app]"),
            "The App Store Connect app ID",
        )
        .required(),
        Field::query("filter_name", "filter[name]", "Filter by group name"),
        Field::query("include", "include", "Comma-separated includes (e.g., betaTesters,builds,app)"),
        LIMIT,
    ]),
    Endpoint::create(
        "create_beta_group",
        "/v1/betaGroups",
        "betaGroups",
        "Create a new beta group for an app.",
    )
    .fields(&[
        Field::to_one("app_id", "app", "apps", "The App Store Connect app ID"),
        Field::attr("name", FieldKind::String, "Name of the beta group").required(),
        Field::attr("publicLinkEnabled", FieldKind::Boolean, "Enable public link for testers")
            .with_default(Literal::Bool(false)),
        Field::attr("feedbackEnabled", FieldKind::Boolean, "Enable feedback from testers")
            .with_default(Literal::Bool(true)),
        Field::attr(
            "publicLinkLimit",
            FieldKind::Number { min: None, max: None },
            "Max number of testers via public link",
        ),
    ]),
    Endpoint::delete(
        "delete_beta_group",
        "/v1/betaGroups/{beta_group_id}",
        "Deleted beta group {beta_group_id}",
        "Delete a beta group.",
    )
    .fields(&[Field::path("beta_group_id", "The beta group ID to delete")]),
    Endpoint::get(
        "list_beta_testers",
        "/v1/betaTesters",
        "List beta testers, optionally filtered by email, beta group, or app.",
    )
    .fields(&[
        Field::query("filter_email", "filter[email]", "Filter by tester email"),
        Field::query("filter_betaGroups", "filter[betaGroups]", "Filter by beta group ID"),
        Field::query("filter_apps", "filter[apps]", "Filter by app ID"),
        Field::query("include", "include", "Comma-separated includes (e.g., betaGroups,apps,builds)"),
        LIMIT,
    ]),
    Endpoint::create(
        "create_beta_tester",
        "/v1/betaTesters",
        "betaTesters",
        "Create a new beta tester and optionally add them to beta groups.",
    )
    .fields(&[
        Field::attr("email", FieldKind::String, "Tester's email address").required(),
        Field::attr("firstName", FieldKind::String, "Tester's first name"),
        Field::attr("lastName", FieldKind::String, "Tester's last name"),
        Field::to_many("betaGroupIds", "betaGroups", "betaGroups", "Beta group IDs to add the tester to"),
    ]),
    Endpoint::delete(
        "delete_beta_tester",
        "/v1/betaTesters/{tester_id}",
        "Deleted beta tester {tester_id}",
        "Remove a beta tester from all groups and apps.",
    )
    .fields(&[Field::path("tester_id", "The beta tester ID to delete")]),
    Endpoint::link(
        "add_tester_to_beta_group",
        HttpMethod::Post,
        "/v1/betaGroups/{beta_group_id}/relationships/betaTesters",
        "Added {#tester_ids} tester(s) to beta group {beta_group_id}",
        "Add one or more beta testers to a beta group.",
    )
    .fields(&[
        Field::path("beta_group_id", "The beta group ID"),
        Field::linkage("tester_ids", "betaTesters", "Array of beta tester IDs to add"),
    ]),
    Endpoint::link(
        "remove_tester_from_beta_group",
        HttpMethod::Delete,
        "/v1/betaGroups/{beta_group_id}/relationships/betaTesters",
        "Removed {#tester_ids} tester(s) from beta group {beta_group_id}",
        "Remove one or more beta testers from a beta group.",
    )
    .fields(&[
        Field::path("beta_group_id", "The beta group ID"),
        Field::linkage("tester_ids", "betaTesters", "Array of beta tester IDs to remove"),
    ]),
    Endpoint::get(
        "list_builds",
        "/v1/builds",
        "List builds, newest first, optionally filtered by app, version or processing state.",
    )
    .fields(&[
        Field::query("filter_app", "filter[app]", "Filter by app ID"),
        Field::query("filter_version", "filter[version]", "Filter by build number"),
        Field::query(
            "filter_preReleaseVersion_version",
            "filter[preReleaseVersion.version]",
            "Filter by marketing version (e.g., 1.2.0)",
        ),
        Field::new(
            "filter_processingState",
            FieldKind::Enum(PROCESSING_STATES),
            Role::Query("filter[processingState]"),
            "Filter by processing state",
        ),
        Field::new(
            "filter_expired",
            FieldKind::Boolean,
            Role::Query("filter[expired]"),
            "Filter by whether the build has expired",
        ),
        Field::query("sort", "sort", "Sort order (default: -uploadedDate)")
            .with_default(Literal::Str("-uploadedDate")),
        Field::query("include", "include", "Comma-separated includes (e.g., app,preReleaseVersion,betaGroups)"),
        LIMIT,
        FETCH_ALL,
    ]),
    Endpoint::link(
        "add_build_to_beta_group",
        HttpMethod::Post,
        "/v1/betaGroups/{beta_group_id}/relationships/builds",
        "Added {#build_ids} build(s) to beta group {beta_group_id}",
        "Make one or more builds available to a beta group.",
    )
    .fields(&[
        Field::path("beta_group_id", "The beta group ID"),
        Field::linkage("build_ids", "builds", "Array of build IDs to add"),
    ]),
];
