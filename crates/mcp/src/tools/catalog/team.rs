//! Team members and registered devices.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, Role, FETCH_ALL, LIMIT};

const DEVICE_PLATFORMS: &[&str] = &["IOS", "MAC_OS"];

const DEVICE_STATUSES: &[&str] = &["ENABLED", "DISABLED"];

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_users",
        "/v1/users",
        "List users on the App Store Connect team, optionally filtered by username or role.",
    )
    .fields(&[
        Field::query("filter_username", "filter[username]", "Filter by username (Apple ID email)"),
        Field::query("filter_roles", "filter[roles]", "Filter by role (e.g., ADMIN, DEVELOPER, APP_MANAGER)"),
        Field::query("include", "include", "Comma-separated includes (e.g., visibleApps)"),
        LIMIT,
        FETCH_ALL,
    ]),
    Endpoint::get(
        "list_devices",
        "/v1/devices",
        "List devices registered for development and ad hoc distribution.",
    )
    .fields(&[
        Field::query("filter_name", "filter[name]", "Filter by device name"),
        Field::query("filter_udid", "filter[udid]", "Filter by device UDID"),
        Field::new(
            "filter_platform",
            FieldKind::Enum(DEVICE_PLATFORMS),
            Role::Query("filter[platform]"),
            "Filter by platform",
        ),
        Field::new(
            "filter_status",
            FieldKind::Enum(DEVICE_STATUSES),
            Role::Query("filter[status]"),
            "Filter by device status",
        ),
        LIMIT,
        FETCH_ALL,
    ]),
];
