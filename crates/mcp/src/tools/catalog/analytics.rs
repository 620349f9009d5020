//! Analytics report requests, reports, instances and segments.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, Literal, Role, LIMIT};

const ACCESS_TYPES: &[&str] = &["ONE_TIME_SNAPSHOT", "ONGOING"];

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::create(
        "create_analytics_report_request",
        "/v1/analyticsReportRequests",
        "analyticsReportRequests",
        "Create a new analytics report request for an app. Use ONE_TIME_SNAPSHOT for a single report or ONGOING for continuous reporting.",
    )
    .fields(&[
        Field::to_one("app_id", "app", "apps", "The App Store Connect app ID"),
        Field::attr("accessType", FieldKind::Enum(ACCESS_TYPES), "The access type for the report request")
            .required(),
    ]),
    Endpoint::get(
        "list_analytics_report_requests",
        "/v1/apps/{app_id}/analyticsReportRequests",
        "List analytics report requests for an app, optionally filtered by access type.",
    )
    .fields(&[
        Field::path("app_id", "The App Store Connect app ID"),
        Field::new(
            "filter_accessType",
            FieldKind::Enum(ACCESS_TYPES),
            Role::Query("filter[accessType]"),
            "Filter by access type",
        ),
        LIMIT,
    ]),
    Endpoint::get(
        "get_analytics_report_request",
        "/v1/analyticsReportRequests/{id}",
        "Get a specific analytics report request by ID, optionally including its reports.",
    )
    .fields(&[
        Field::path("id", "The analytics report request ID"),
        Field::query(
            "include",
            "include",
            "Comma-separated related resources to include (default: reports)",
        )
        .with_default(Literal::Str("reports")),
    ]),
    Endpoint::get(
        "list_analytics_reports",
        "/v1/analyticsReportRequests/{request_id}/reports",
        "List analytics reports for a report request, optionally filtered by category.",
    )
    .fields(&[
        Field::path("request_id", "The analytics report request ID"),
        Field::query(
            "filter_category",
            "filter[category]",
            "Filter by report category (e.g., APP_USAGE, APP_STORE_ENGAGEMENT, COMMERCE, FRAMEWORK_USAGE, PERFORMANCE)",
        ),
        LIMIT,
    ]),
    Endpoint::get(
        "list_analytics_report_instances",
        "/v1/analyticsReports/{report_id}/instances",
        "List instances of an analytics report, optionally filtered by processing date and granularity.",
    )
    .fields(&[
        Field::path("report_id", "The analytics report ID"),
        Field::query(
            "filter_processingDate",
            "filter[processingDate]",
            "Filter by processing date (ISO 8601 date string)",
        ),
        Field::query(
            "filter_granularity",
            "filter[granularity]",
            "Filter by granularity (e.g., DAILY, WEEKLY, MONTHLY)",
        ),
        LIMIT,
    ]),
    Endpoint::get(
        "list_analytics_report_segments",
        "/v1/analyticsReportInstances/{instance_id}/segments",
        "List segments for an analytics report instance.",
    )
    .fields(&[
        Field::path("instance_id", "The analytics report instance ID"),
        LIMIT,
    ]),
];
