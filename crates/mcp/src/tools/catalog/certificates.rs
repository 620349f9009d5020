//! Signing certificates and provisioning profiles.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, LIMIT};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_certificates",
        "/v1/certificates",
        "List signing certificates. Filter by type, display name, or serial number.",
    )
    .fields(&[
        Field::query(
            "filter_certificateType",
            "filter[certificateType]",
            "Filter by certificate type (e.g., IOS_DEVELOPMENT, IOS_DISTRIBUTION, MAC_APP_DEVELOPMENT, MAC_APP_DISTRIBUTION, DEVELOPER_ID_APPLICATION)",
        ),
        Field::query("filter_displayName", "filter[displayName]", "Filter by display name"),
        Field::query("filter_serialNumber", "filter[serialNumber]", "Filter by serial number"),
        LIMIT,
    ]),
    Endpoint::get(
        "get_certificate",
        "/v1/certificates/{id}",
        "Get details for a specific signing certificate.",
    )
    .fields(&[Field::path("id", "The certificate ID")]),
    Endpoint::create(
        "create_certificate",
        "/v1/certificates",
        "certificates",
        "Create a new signing certificate from a CSR.",
    )
    .fields(&[
        Field::attr(
            "certificateType",
            FieldKind::String,
            "Certificate type (e.g., IOS_DEVELOPMENT, IOS_DISTRIBUTION, MAC_APP_DEVELOPMENT, MAC_APP_DISTRIBUTION, DEVELOPER_ID_APPLICATION)",
        )
        .required(),
        Field::attr(
            "csrContent",
            FieldKind::String,
            "The certificate signing request (CSR) content in PEM format",
        )
        .required(),
    ]),
    Endpoint::delete(
        "revoke_certificate",
        "/v1/certificates/{id}",
        "Revoked certificate {id}",
        "Revoke (delete) a signing certificate.",
    )
    .fields(&[Field::path("id", "The certificate ID to revoke")]),
    Endpoint::get(
        "list_profiles",
        "/v1/profiles",
        "List provisioning profiles. Filter by name, type, or state.",
    )
    .fields(&[
        Field::query("filter_name", "filter[name]", "Filter by profile name"),
        Field::query(
            "filter_profileType",
            "filter[profileType]",
            "Filter by profile type (e.g., IOS_APP_DEVELOPMENT, IOS_APP_STORE, MAC_APP_DEVELOPMENT, MAC_APP_STORE)",
        ),
        Field::query(
            "filter_profileState",
            "filter[profileState]",
            "Filter by profile state (e.g., ACTIVE, INVALID)",
        ),
        LIMIT,
    ]),
    Endpoint::get(
        "get_profile",
        "/v1/profiles/{id}",
        "Get details for a specific provisioning profile, optionally including related resources.",
    )
    .fields(&[
        Field::path("id", "The profile ID"),
        Field::query("include", "include", "Comma-separated includes (e.g., bundleId,certificates,devices)"),
    ]),
    Endpoint::create(
        "create_profile",
        "/v1/profiles",
        "profiles",
        "Create a new provisioning profile.",
    )
    .fields(&[
        Field::attr("name", FieldKind::String, "Profile name").required(),
        Field::attr(
            "profileType",
            FieldKind::String,
            "Profile type (e.g., IOS_APP_DEVELOPMENT, IOS_APP_STORE, MAC_APP_DEVELOPMENT, MAC_APP_STORE)",
        )
        .required(),
        Field::to_one("bundleId_id", "bundleId", "bundleIds", "The bundle ID resource ID"),
        Field::to_many(
            "certificate_ids",
            "certificates",
            "certificates",
            "Array of certificate IDs to include in the profile",
        )
        .required(),
        Field::to_many(
            "device_ids",
            "devices",
            "devices",
            "Array of device IDs to include (required for development profiles)",
        ),
    ]),
    Endpoint::delete(
        "delete_profile",
        "/v1/profiles/{id}",
        "Deleted profile {id}",
        "Delete a provisioning profile.",
    )
    .fields(&[Field::path("id", "The profile ID to delete")]),
];
