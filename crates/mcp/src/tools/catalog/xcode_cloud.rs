//! Xcode Cloud products, workflows, build runs and their results.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, Role, LIMIT};

const PRODUCT_INCLUDES: &[(&str, &str)] = &[("include", "app,bundleId,primaryRepositories")];

const ACTION_ID: Field = Field::path("action_id", "The CI build action ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_ci_products",
        "/v1/ciProducts",
        "List Xcode Cloud CI products, optionally filtered by product type.",
    )
    .fields(&[
        Field::new(
            "filter_productType",
            FieldKind::Enum(&["APP", "FRAMEWORK"]),
            Role::Query("filter[productType]"),
            "Filter by product type (APP or FRAMEWORK)",
        ),
        LIMIT,
    ])
    .fixed_query(PRODUCT_INCLUDES),
    Endpoint::get(
        "get_ci_product",
        "/v1/ciProducts/{id}",
        "Get details of a specific Xcode Cloud CI product.",
    )
    .fields(&[Field::path("id", "The CI product ID")])
    .fixed_query(PRODUCT_INCLUDES),
    Endpoint::get(
        "list_ci_workflows",
        "/v1/ciProducts/{product_id}/workflows",
        "List Xcode Cloud workflows for a CI product.",
    )
    .fields(&[Field::path("product_id", "The CI product ID"), LIMIT]),
    Endpoint::get(
        "get_ci_workflow",
        "/v1/ciWorkflows/{id}",
        "Get details of a specific Xcode Cloud workflow.",
    )
    .fields(&[Field::path("id", "The CI workflow ID")]),
    Endpoint::get(
        "list_ci_build_runs",
        "/v1/ciWorkflows/{workflow_id}/buildRuns",
        "List Xcode Cloud build runs for a workflow, sorted by most recent.",
    )
    .fields(&[Field::path("workflow_id", "The CI workflow ID"), LIMIT])
    .fixed_query(&[("sort", "-startedDate")]),
    Endpoint::get(
        "get_ci_build_run",
        "/v1/ciBuildRuns/{id}",
        "Get details of a specific Xcode Cloud build run.",
    )
    .fields(&[Field::path("id", "The CI build run ID")])
    .fixed_query(&[("include", "builds,workflow,sourceBranchOrTag,destinationBranch")]),
    Endpoint::create(
        "start_ci_build_run",
        "/v1/ciBuildRuns",
        "ciBuildRuns",
        "Start a new Xcode Cloud build run for a workflow.",
    )
    .fields(&[
        Field::to_one("workflow_id", "workflow", "ciWorkflows", "The CI workflow ID to run"),
        Field::to_one(
            "sourceBranchOrTag_id",
            "sourceBranchOrTag",
            "scmGitReferences",
            "The ID of the source branch or tag to build from",
        ),
    ]),
    Endpoint::get(
        "list_ci_build_actions",
        "/v1/ciBuildRuns/{run_id}/actions",
        "List build actions for an Xcode Cloud build run.",
    )
    .fields(&[Field::path("run_id", "The CI build run ID"), LIMIT]),
    Endpoint::get(
        "list_ci_artifacts",
        "/v1/ciBuildActions/{action_id}/artifacts",
        "List artifacts for an Xcode Cloud build action.",
    )
    .fields(&[ACTION_ID, LIMIT]),
    Endpoint::get(
        "list_ci_test_results",
        "/v1/ciBuildActions/{action_id}/testResults",
        "List test results for an Xcode Cloud build action.",
    )
    .fields(&[ACTION_ID, LIMIT]),
    Endpoint::get(
        "list_ci_issues",
        "/v1/ciBuildActions/{action_id}/issues",
        "List issues for an Xcode Cloud build action.",
    )
    .fields(&[ACTION_ID, LIMIT]),
    Endpoint::get(
        "list_ci_mac_os_versions",
        "/v1/ciMacOsVersions",
        "List available macOS versions for Xcode Cloud, including Xcode versions.",
    )
    .fields(&[LIMIT])
    .fixed_query(&[("include", "xcodeVersions")]),
    Endpoint::get(
        "list_ci_xcode_versions",
        "/v1/ciXcodeVersions",
        "List available Xcode versions for Xcode Cloud, including macOS versions.",
    )
    .fields(&[LIMIT])
    .fixed_query(&[("include", "macOsVersions")]),
];
