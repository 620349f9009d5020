//! App Clips and their default experiences.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, Literal, LIMIT};

const ACTIONS: &[&str] = &["OPEN"];

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get("list_app_clips", "/v1/apps/{app_id}/appClips", "List App Clips for an app.")
        .fields(&[Field::path("app_id", "The App Store Connect app ID"), LIMIT])
        .fixed_query(&[("include", "appClipDefaultExperiences")]),
    Endpoint::get("get_app_clip", "/v1/appClips/{id}", "Get details of a specific App Clip.")
        .fields(&[Field::path("id", "The App Clip ID")])
        .fixed_query(&[("include", "appClipDefaultExperiences")]),
    Endpoint::get(
        "list_app_clip_default_experiences",
        "/v1/appClips/{clip_id}/appClipDefaultExperiences",
        "List default experiences for an App Clip.",
    )
    .fields(&[Field::path("clip_id", "The App Clip ID"), LIMIT])
    .fixed_query(&[("include", "appClipDefaultExperienceLocalizations")]),
    Endpoint::create(
        "create_app_clip_default_experience",
        "/v1/appClipDefaultExperiences",
        "appClipDefaultExperiences",
        "Create a default experience for an App Clip.",
    )
    .fields(&[
        Field::to_one("clip_id", "appClip", "appClips", "The App Clip ID"),
        Field::to_one(
            "appStoreVersion_id",
            "appStoreVersion",
            "appStoreVersions",
            "The App Store version ID to associate this experience with",
        ),
        Field::attr("action", FieldKind::Enum(ACTIONS), "The action for the default experience")
            .with_default(Literal::Str("OPEN")),
    ]),
    Endpoint::update(
        "update_app_clip_default_experience",
        "/v1/appClipDefaultExperiences/{id}",
        "appClipDefaultExperiences",
        "Update a default experience for an App Clip.",
    )
    .fields(&[
        Field::id("id", "The App Clip default experience ID"),
        Field::attr("action", FieldKind::Enum(ACTIONS), "Updated action"),
    ]),
    Endpoint::delete(
        "delete_app_clip_default_experience",
        "/v1/appClipDefaultExperiences/{id}",
        "Deleted App Clip default experience {id}",
        "Delete a default experience for an App Clip.",
    )
    .fields(&[Field::path("id", "The App Clip default experience ID to delete")]),
];
