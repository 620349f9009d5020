//! TestFlight localizations, beta review submissions and review details.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, LIMIT};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_beta_app_localizations",
        "/v1/apps/{app_id}/betaAppLocalizations",
        "List TestFlight app-level localizations (descriptions per locale) for an app.",
    )
    .fields(&[Field::path("app_id", "The App Store Connect app ID"), LIMIT]),
    Endpoint::create(
        "create_beta_app_localization",
        "/v1/betaAppLocalizations",
        "betaAppLocalizations",
        "Create a TestFlight app-level localization for a specific locale. Sets description, feedback email, and URLs.",
    )
    .fields(&[
        Field::to_one("app_id", "app", "apps", "The App Store Connect app ID"),
        Field::attr("locale", FieldKind::String, "Locale code (e.g., en-US, fr-FR)").required(),
        Field::attr("description", FieldKind::String, "TestFlight app description for this locale"),
        Field::attr("feedbackEmail", FieldKind::String, "Feedback email address"),
        Field::attr("marketingUrl", FieldKind::String, "Marketing URL"),
        Field::attr("privacyPolicyUrl", FieldKind::String, "Privacy policy URL"),
        Field::attr("tvOsPrivacyPolicy", FieldKind::String, "tvOS privacy policy text"),
    ]),
    Endpoint::update(
        "update_beta_app_localization",
        "/v1/betaAppLocalizations/{id}",
        "betaAppLocalizations",
        "Update a TestFlight app-level localization. Change description, feedback email, or URLs.",
    )
    .fields(&[
        Field::id("id", "The beta app localization ID"),
        Field::attr("description", FieldKind::String, "TestFlight app description"),
        Field::attr("feedbackEmail", FieldKind::String, "Feedback email address"),
        Field::attr("marketingUrl", FieldKind::String, "Marketing URL"),
        Field::attr("privacyPolicyUrl", FieldKind::String, "Privacy policy URL"),
        Field::attr("tvOsPrivacyPolicy", FieldKind::String, "tvOS privacy policy text"),
    ]),
    Endpoint::get(
        "list_beta_build_localizations",
        "/v1/builds/{build_id}/betaBuildLocalizations",
        "List TestFlight build-level localizations ('What to Test' per locale) for a build.",
    )
    .fields(&[Field::path("build_id", "The build ID"), LIMIT]),
    Endpoint::create(
        "create_beta_build_localization",
        "/v1/betaBuildLocalizations",
        "betaBuildLocalizations",
        "Create a TestFlight build-level localization ('What to Test') for a specific locale.",
    )
    .fields(&[
        Field::to_one("build_id", "build", "builds", "The build ID"),
        Field::attr("locale", FieldKind::String, "Locale code (e.g., en-US, fr-FR)").required(),
        Field::attr("whatsNew", FieldKind::String, "What to test text for this build"),
    ]),
    Endpoint::update(
        "update_beta_build_localization",
        "/v1/betaBuildLocalizations/{id}",
        "betaBuildLocalizations",
        "Update a TestFlight build-level localization. Change the 'What to Test' text.",
    )
    .fields(&[
        Field::id("id", "The beta build localization ID"),
        Field::attr("whatsNew", FieldKind::String, "What to test text for this build"),
    ]),
    Endpoint::create(
        "submit_build_for_beta_review",
        "/v1/betaAppReviewSubmissions",
        "betaAppReviewSubmissions",
        "Submit a build for TestFlight beta review.",
    )
    .fields(&[Field::to_one("build_id", "build", "builds", "The build ID to submit for beta review")]),
    Endpoint::get(
        "get_beta_app_review_detail",
        "/v1/apps/{app_id}/betaAppReviewDetail",
        "Get the beta app review detail (contact info and demo account) for an app.",
    )
    .fields(&[Field::path("app_id", "The App Store Connect app ID")]),
    Endpoint::update(
        "update_beta_app_review_detail",
        "/v1/betaAppReviewDetails/{id}",
        "betaAppReviewDetails",
        "Update the beta app review detail (contact info and demo account credentials).",
    )
    .fields(&[
        Field::id("id", "The beta app review detail ID"),
        Field::attr("contactFirstName", FieldKind::String, "Contact first name"),
        Field::attr("contactLastName", FieldKind::String, "Contact last name"),
        Field::attr("contactPhone", FieldKind::String, "Contact phone number"),
        Field::attr("contactEmail", FieldKind::String, "Contact email address"),
        Field::attr("demoAccountName", FieldKind::String, "Demo account username"),
        Field::attr("demoAccountPassword", FieldKind::String, "Demo account password"),
        Field::attr("demoAccountRequired", FieldKind::Boolean, "Whether a demo account is required"),
        Field::attr("notes", FieldKind::String, "Additional notes for the reviewer"),
    ]),
];
