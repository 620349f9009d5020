//! Phased releases and manual version release requests.

use crate::tools::endpoint::{Endpoint, Field, FieldKind};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "get_phased_release",
        "/v1/appStoreVersions/{version_id}/appStoreVersionPhasedRelease",
        "Get the phased release status for an App Store version.",
    )
    .fields(&[Field::path("version_id", "The App Store version ID")]),
    Endpoint::create(
        "create_phased_release",
        "/v1/appStoreVersionPhasedReleases",
        "appStoreVersionPhasedReleases",
        "Create a phased release for an App Store version. Rolls out to users gradually over 7 days.",
    )
    .fields(&[
        Field::to_one("version_id", "appStoreVersion", "appStoreVersions", "The App Store version ID"),
        Field::attr(
            "phasedReleaseState",
            FieldKind::Enum(&["INACTIVE", "ACTIVE"]),
            "Initial phased release state (INACTIVE to create without starting, ACTIVE to begin rollout)",
        )
        .required(),
    ]),
    Endpoint::update(
        "update_phased_release",
        "/v1/appStoreVersionPhasedReleases/{id}",
        "appStoreVersionPhasedReleases",
        "Update a phased release state. Use PAUSED to halt rollout, ACTIVE to resume, or COMPLETE to release to all users.",
    )
    .fields(&[
        Field::id("id", "The phased release ID"),
        Field::attr(
            "phasedReleaseState",
            FieldKind::Enum(&["ACTIVE", "PAUSED", "COMPLETE"]),
            "New phased release state",
        )
        .required(),
    ]),
    Endpoint::delete(
        "delete_phased_release",
        "/v1/appStoreVersionPhasedReleases/{id}",
        "Deleted phased release {id}",
        "Delete a phased release configuration from an App Store version.",
    )
    .fields(&[Field::path("id", "The phased release ID to delete")]),
    Endpoint::create(
        "create_version_release_request",
        "/v1/appStoreVersionReleaseRequests",
        "appStoreVersionReleaseRequests",
        "Manually release a version that is waiting for developer release. Triggers immediate release to the App Store.",
    )
    .fields(&[Field::to_one(
        "version_id",
        "appStoreVersion",
        "appStoreVersions",
        "The App Store version ID to release",
    )]),
];
