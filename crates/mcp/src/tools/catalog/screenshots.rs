//! Screenshot sets, screenshots, preview sets and previews.
//!
//! Creating a screenshot or preview only reserves it. The response carries the
//! upload operations the caller performs afterwards.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, LIMIT};

const LOCALIZATION_ID: Field = Field::path("localization_id", "The App Store version localization ID");

const FILE_SIZE: FieldKind = FieldKind::Number { min: None, max: None };

const fn localization() -> Field {
    Field::to_one(
        "localization_id",
        "appStoreVersionLocalization",
        "appStoreVersionLocalizations",
        "The App Store version localization ID",
    )
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_screenshot_sets",
        "/v1/appStoreVersionLocalizations/{localization_id}/appScreenshotSets",
        "List app screenshot sets for an App Store version localization.",
    )
    .fields(&[LOCALIZATION_ID, LIMIT]),
    Endpoint::create(
        "create_screenshot_set",
        "/v1/appScreenshotSets",
        "appScreenshotSets",
        "Create a new screenshot set for an App Store version localization.",
    )
    .fields(&[
        localization(),
        Field::attr(
            "screenshotDisplayType",
            FieldKind::String,
            "The display type (e.g., APP_IPHONE_67, APP_IPHONE_65, APP_IPAD_PRO_3GEN_129, APP_DESKTOP, etc.)",
        )
        .required(),
    ]),
    Endpoint::delete(
        "delete_screenshot_set",
        "/v1/appScreenshotSets/{id}",
        "Deleted screenshot set {id}",
        "Delete an app screenshot set.",
    )
    .fields(&[Field::path("id", "The app screenshot set ID to delete")]),
    Endpoint::get(
        "list_screenshots",
        "/v1/appScreenshotSets/{set_id}/appScreenshots",
        "List screenshots within a screenshot set.",
    )
    .fields(&[Field::path("set_id", "The app screenshot set ID"), LIMIT]),
    Endpoint::create(
        "create_screenshot",
        "/v1/appScreenshots",
        "appScreenshots",
        "Create a new screenshot (initiates upload). After creation, use the upload operations from the response to upload the image data.",
    )
    .fields(&[
        Field::to_one("set_id", "appScreenshotSet", "appScreenshotSets", "The app screenshot set ID"),
        Field::attr("fileName", FieldKind::String, "The file name of the screenshot").required(),
        Field::attr("fileSize", FILE_SIZE, "The file size in bytes").required(),
    ]),
    Endpoint::delete(
        "delete_screenshot",
        "/v1/appScreenshots/{id}",
        "Deleted screenshot {id}",
        "Delete an app screenshot.",
    )
    .fields(&[Field::path("id", "The app screenshot ID to delete")]),
    Endpoint::get(
        "list_preview_sets",
        "/v1/appStoreVersionLocalizations/{localization_id}/appPreviewSets",
        "List app preview sets for an App Store version localization.",
    )
    .fields(&[LOCALIZATION_ID, LIMIT]),
    Endpoint::create(
        "create_preview_set",
        "/v1/appPreviewSets",
        "appPreviewSets",
        "Create a new app preview set for an App Store version localization.",
    )
    .fields(&[
        localization(),
        Field::attr(
            "previewType",
            FieldKind::String,
            "The preview type (e.g., IPHONE_67, IPHONE_65, IPAD_PRO_3GEN_129, DESKTOP, etc.)",
        )
        .required(),
    ]),
    Endpoint::delete(
        "delete_preview_set",
        "/v1/appPreviewSets/{id}",
        "Deleted preview set {id}",
        "Delete an app preview set.",
    )
    .fields(&[Field::path("id", "The app preview set ID to delete")]),
    Endpoint::get(
        "list_previews",
        "/v1/appPreviewSets/{set_id}/appPreviews",
        "List app previews within a preview set.",
    )
    .fields(&[Field::path("set_id", "The app preview set ID"), LIMIT]),
    Endpoint::create(
        "create_preview",
        "/v1/appPreviews",
        "appPreviews",
        "Create a new app preview (initiates upload). After creation, use the upload operations from the response to upload the video data.",
    )
    .fields(&[
        Field::to_one("set_id", "appPreviewSet", "appPreviewSets", "The app preview set ID"),
        Field::attr("fileName", FieldKind::String, "The file name of the preview video").required(),
        Field::attr("fileSize", FILE_SIZE, "The file size in bytes").required(),
        Field::attr(
            "previewFrameTimeCode",
            FieldKind::String,
            "The time code for the preview frame image (e.g., 00:00:05;00)",
        ),
    ]),
    Endpoint::delete(
        "delete_preview",
        "/v1/appPreviews/{id}",
        "Deleted preview {id}",
        "Delete an app preview.",
    )
    .fields(&[Field::path("id", "The app preview ID to delete")]),
];
