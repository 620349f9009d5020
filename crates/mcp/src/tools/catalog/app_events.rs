//! In-app events and their localizations.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, LIMIT};

const BADGES: &[&str] = &[
    "LIVE_EVENT",
    "PREMIERE",
    "CHALLENGE",
    "COMPETITION",
    "NEW_SEASON",
    "MAJOR_UPDATE",
    "SPECIAL_EVENT",
];

const PURCHASE_REQUIREMENTS: &[&str] = &[
    "NO_COST_ASSOCIATED",
    "IN_APP_PURCHASE",
    "SUBSCRIPTION",
    "IN_APP_PURCHASE_AND_SUBSCRIPTION",
    "IN_APP_PURCHASE_OR_SUBSCRIPTION",
];

const PRIORITIES: &[&str] = &["HIGH", "NORMAL"];

const PURPOSES: &[&str] = &[
    "APPROPRIATE_FOR_ALL_USERS",
    "ATTRACT_NEW_USERS",
    "KEEP_ACTIVE_USERS_INFORMED",
    "BRING_BACK_LAPSED_USERS",
];

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get("list_app_events", "/v1/apps/{app_id}/appEvents", "List in-app events for an app.")
        .fields(&[Field::path("app_id", "The App Store Connect app ID"), LIMIT]),
    Endpoint::create(
        "create_app_event",
        "/v1/appEvents",
        "appEvents",
        "Create a new in-app event for an app.",
    )
    .fields(&[
        Field::to_one("app_id", "app", "apps", "The App Store Connect app ID"),
        Field::attr("referenceName", FieldKind::String, "A reference name for the event").required(),
        Field::attr("badge", FieldKind::Enum(BADGES), "The badge type for the event").required(),
        Field::attr("deepLink", FieldKind::String, "Deep link URL for the event"),
        Field::attr(
            "purchaseRequirement",
            FieldKind::Enum(PURCHASE_REQUIREMENTS),
            "Purchase requirement for the event",
        ),
        Field::attr("primaryLocale", FieldKind::String, "Primary locale for the event (e.g., en-US)"),
        Field::attr("priority", FieldKind::Enum(PRIORITIES), "Priority of the event"),
        Field::attr("purpose", FieldKind::Enum(PURPOSES), "Target audience purpose for the event"),
        Field::attr(
            "territorySchedules",
            FieldKind::ObjectArray,
            "Array of territory schedule objects with publishStart, eventStart, eventEnd",
        ),
    ]),
    Endpoint::update(
        "update_app_event",
        "/v1/appEvents/{id}",
        "appEvents",
        "Update an existing in-app event.",
    )
    .fields(&[
        Field::id("id", "The app event ID"),
        Field::attr("referenceName", FieldKind::String, "Updated reference name"),
        Field::attr("badge", FieldKind::Enum(BADGES), "Updated badge type"),
        Field::attr("deepLink", FieldKind::String, "Updated deep link URL"),
        Field::attr(
            "purchaseRequirement",
            FieldKind::Enum(PURCHASE_REQUIREMENTS),
            "Updated purchase requirement",
        ),
        Field::attr("primaryLocale", FieldKind::String, "Updated primary locale"),
        Field::attr("priority", FieldKind::Enum(PRIORITIES), "Updated priority"),
        Field::attr("purpose", FieldKind::Enum(PURPOSES), "Updated purpose"),
        Field::attr("territorySchedules", FieldKind::ObjectArray, "Updated territory schedule objects"),
    ]),
    Endpoint::delete(
        "delete_app_event",
        "/v1/appEvents/{id}",
        "Deleted app event {id}",
        "Delete an in-app event.",
    )
    .fields(&[Field::path("id", "The app event ID to delete")]),
    Endpoint::get(
        "list_app_event_localizations",
        "/v1/appEvents/{event_id}/localizations",
        "List localizations for an in-app event.",
    )
    .fields(&[Field::path("event_id", "The app event ID"), LIMIT]),
    Endpoint::create(
        "create_app_event_localization",
        "/v1/appEventLocalizations",
        "appEventLocalizations",
        "Create a localization for an in-app event.",
    )
    .fields(&[
        Field::to_one("event_id", "appEvent", "appEvents", "The app event ID"),
        Field::attr("locale", FieldKind::String, "The locale code (e.g., en-US, fr-FR)").required(),
        Field::attr("name", FieldKind::String, "Localized name of the event").required(),
        Field::attr("shortDescription", FieldKind::String, "Localized short description"),
        Field::attr("longDescription", FieldKind::String, "Localized long description"),
    ]),
    Endpoint::update(
        "update_app_event_localization",
        "/v1/appEventLocalizations/{id}",
        "appEventLocalizations",
        "Update a localization for an in-app event.",
    )
    .fields(&[
        Field::id("id", "The app event localization ID"),
        Field::attr("name", FieldKind::String, "Updated localized name"),
        Field::attr("shortDescription", FieldKind::String, "Updated localized short description"),
        Field::attr("longDescription", FieldKind::String, "Updated localized long description"),
    ]),
    Endpoint::delete(
        "delete_app_event_localization",
        "/v1/appEventLocalizations/{id}",
        "Deleted app event localization {id}",
        "Delete a localization for an in-app event.",
    )
    .fields(&[Field::path("id", "The app event localization ID to delete")]),
];
