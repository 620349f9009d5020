//! Apps, App Store versions, version localizations and review submission.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, Role, FETCH_ALL, LIMIT};

pub(super) const PLATFORMS: &[&str] = &["IOS", "MAC_OS", "TV_OS", "VISION_OS"];

const RELEASE_TYPES: &[&str] = &["MANUAL", "AFTER_APPROVAL", "SCHEDULED"];

const APP_ID: Field = Field::path("app_id", "The App Store Connect app ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_apps",
        "/v1/apps",
        "List all apps in the App Store Connect account, optionally filtered by bundle ID, name or SKU.",
    )
    .fields(&[
        Field::query("filter_bundleId", "filter[bundleId]", "Filter by bundle identifier"),
        Field::query("filter_name", "filter[name]", "Filter by app name"),
        Field::query("filter_sku", "filter[sku]", "Filter by SKU"),
        Field::query("include", "include", "Comma-separated includes (e.g., appInfos,appStoreVersions)"),
        Field::query("sort", "sort", "Sort order (e.g., name, -name, bundleId)"),
        LIMIT,
        FETCH_ALL,
    ]),
    Endpoint::get("get_app", "/v1/apps/{app_id}", "Get details of a specific app.").fields(&[
        APP_ID,
        Field::query("include", "include", "Comma-separated includes (e.g., appInfos,appStoreVersions,builds)"),
    ]),
    Endpoint::create(
        "create_app",
        "/v1/apps",
        "apps",
        "Create a new app record for a registered bundle ID.",
    )
    .fields(&[
        Field::attr("name", FieldKind::String, "App name as shown on the App Store").required(),
        Field::attr("sku", FieldKind::String, "Unique SKU for the app").required(),
        Field::attr("primaryLocale", FieldKind::String, "Primary locale (e.g., en-US)").required(),
        Field::to_one("bundle_id", "bundleId", "bundleIds", "The bundle ID resource ID"),
    ]),
    Endpoint::get(
        "list_app_store_versions",
        "/v1/apps/{app_id}/appStoreVersions",
        "List App Store versions for an app, optionally filtered by platform, state or version string.",
    )
    .fields(&[
        APP_ID,
        Field::new(
            "filter_platform",
            FieldKind::Enum(PLATFORMS),
            Role::Query("filter[platform]"),
            "Filter by platform",
        ),
        Field::query(
            "filter_appStoreState",
            "filter[appStoreState]",
            "Filter by state (e.g., PREPARE_FOR_SUBMISSION, READY_FOR_SALE)",
        ),
        Field::query("filter_versionString", "filter[versionString]", "Filter by version string"),
        Field::query("include", "include", "Comma-separated includes (e.g., build,appStoreVersionLocalizations)"),
        LIMIT,
    ]),
    Endpoint::create(
        "create_app_store_version",
        "/v1/appStoreVersions",
        "appStoreVersions",
        "Create a new App Store version for an app.",
    )
    .fields(&[
        Field::to_one("app_id", "app", "apps", "The App Store Connect app ID"),
        Field::attr("platform", FieldKind::Enum(PLATFORMS), "Platform of the version").required(),
        Field::attr("versionString", FieldKind::String, "Version string (e.g., 1.2.0)").required(),
        Field::attr("copyright", FieldKind::String, "Copyright notice"),
        Field::attr("releaseType", FieldKind::Enum(RELEASE_TYPES), "How the version is released after approval"),
        Field::attr(
            "earliestReleaseDate",
            FieldKind::String,
            "Earliest release date for SCHEDULED releases (ISO 8601)",
        ),
        Field::to_one("build_id", "build", "builds", "Build to attach to the version").optional(),
    ]),
    Endpoint::update(
        "update_app_store_version",
        "/v1/appStoreVersions/{id}",
        "appStoreVersions",
        "Update an App Store version's attributes or attached build.",
    )
    .fields(&[
        Field::id("id", "The App Store version ID"),
        Field::attr("versionString", FieldKind::String, "Updated version string"),
        Field::attr("copyright", FieldKind::String, "Updated copyright notice"),
        Field::attr("releaseType", FieldKind::Enum(RELEASE_TYPES), "Updated release type"),
        Field::attr("earliestReleaseDate", FieldKind::String, "Updated earliest release date (ISO 8601)"),
        Field::attr("downloadable", FieldKind::Boolean, "Whether the version is downloadable"),
        Field::to_one("build_id", "build", "builds", "Build to attach to the version").optional(),
    ]),
    Endpoint::get(
        "list_version_localizations",
        "/v1/appStoreVersions/{version_id}/appStoreVersionLocalizations",
        "List the localized metadata of an App Store version.",
    )
    .fields(&[
        Field::path("version_id", "The App Store version ID"),
        Field::query("filter_locale", "filter[locale]", "Filter by locale (e.g., en-US)"),
        LIMIT,
    ]),
    Endpoint::get(
        "get_version_localization",
        "/v1/appStoreVersionLocalizations/{id}",
        "Get one localization of an App Store version.",
    )
    .fields(&[Field::path("id", "The version localization ID")]),
    Endpoint::create(
        "create_version_localization",
        "/v1/appStoreVersionLocalizations",
        "appStoreVersionLocalizations",
        "Add a localization to an App Store version.",
    )
    .fields(&[
        Field::to_one("version_id", "appStoreVersion", "appStoreVersions", "The App Store version ID"),
        Field::attr("locale", FieldKind::String, "Locale code (e.g., en-US, de-DE)").required(),
        Field::attr("description", FieldKind::String, "App description"),
        Field::attr("keywords", FieldKind::String, "Comma-separated keywords"),
        Field::attr("whatsNew", FieldKind::String, "Release notes for this version"),
        Field::attr("promotionalText", FieldKind::String, "Promotional text"),
        Field::attr("marketingUrl", FieldKind::String, "Marketing URL"),
        Field::attr("supportUrl", FieldKind::String, "Support URL"),
    ]),
    Endpoint::update(
        "update_version_localization",
        "/v1/appStoreVersionLocalizations/{id}",
        "appStoreVersionLocalizations",
        "Update the localized metadata of an App Store version.",
    )
    .fields(&[
        Field::id("id", "The version localization ID"),
        Field::attr("description", FieldKind::String, "Updated app description"),
        Field::attr("keywords", FieldKind::String, "Updated comma-separated keywords"),
        Field::attr("whatsNew", FieldKind::String, "Updated release notes"),
        Field::attr("promotionalText", FieldKind::String, "Updated promotional text"),
        Field::attr("marketingUrl", FieldKind::String, "Updated marketing URL"),
        Field::attr("supportUrl", FieldKind::String, "Updated support URL"),
    ]),
    Endpoint::create(
        "create_app_store_version_submission",
        "/v1/appStoreVersionSubmissions",
        "appStoreVersionSubmissions",
        "Submit an App Store version for App Review.",
    )
    .fields(&[Field::to_one(
        "version_id",
        "appStoreVersion",
        "appStoreVersions",
        "The App Store version ID to submit",
    )]),
];
