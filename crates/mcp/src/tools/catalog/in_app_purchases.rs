//! In-app purchases, their localizations, price points and review submission.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, LIMIT};

const IAP_TYPES: &[&str] = &["CONSUMABLE", "NON_CONSUMABLE", "NON_RENEWING_SUBSCRIPTION"];

const IAP_ID: Field = Field::path("iap_id", "The in-app purchase ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_in_app_purchases",
        "/v1/apps/{app_id}/inAppPurchasesV2",
        "List in-app purchases for an app.",
    )
    .fields(&[
        Field::path("app_id", "The App Store Connect app ID"),
        Field::query(
            "filter_inAppPurchaseType",
            "filter[inAppPurchaseType]",
            "Filter by type (CONSUMABLE, NON_CONSUMABLE, NON_RENEWING_SUBSCRIPTION)",
        ),
        Field::query("filter_name", "filter[name]", "Filter by name"),
        Field::query("filter_productId", "filter[productId]", "Filter by product ID"),
        Field::query(
            "include",
            "include",
            "Comma-separated related resources to include (e.g., inAppPurchaseLocalizations,pricePoints,content)",
        ),
        LIMIT,
    ]),
    Endpoint::get(
        "get_in_app_purchase",
        "/v2/inAppPurchases/{id}",
        "Get details of a specific in-app purchase.",
    )
    .fields(&[
        Field::path("id", "The in-app purchase ID"),
        Field::query(
            "include",
            "include",
            "Comma-separated related resources to include (e.g., inAppPurchaseLocalizations,pricePoints,content,appStoreReviewScreenshot)",
        ),
    ]),
    Endpoint::create(
        "create_in_app_purchase",
        "/v2/inAppPurchases",
        "inAppPurchases",
        "Create a new in-app purchase for an app.",
    )
    .fields(&[
        Field::to_one("app_id", "app", "apps", "The App Store Connect app ID"),
        Field::attr("name", FieldKind::String, "The name of the in-app purchase").required(),
        Field::attr("productId", FieldKind::String, "A unique product ID for the in-app purchase").required(),
        Field::attr(
            "inAppPurchaseType",
            FieldKind::Enum(IAP_TYPES),
            "The type of in-app purchase",
        )
        .required(),
    ]),
    Endpoint::update(
        "update_in_app_purchase",
        "/v2/inAppPurchases/{id}",
        "inAppPurchases",
        "Update an existing in-app purchase.",
    )
    .fields(&[
        Field::id("id", "The in-app purchase ID"),
        Field::attr("name", FieldKind::String, "Updated name"),
        Field::attr("reviewNote", FieldKind::String, "Review note for App Review"),
        Field::attr("familySharable", FieldKind::Boolean, "Whether the purchase is family sharable"),
    ]),
    Endpoint::delete(
        "delete_in_app_purchase",
        "/v2/inAppPurchases/{id}",
        "Deleted in-app purchase {id}",
        "Delete an in-app purchase.",
    )
    .fields(&[Field::path("id", "The in-app purchase ID to delete")]),
    Endpoint::get(
        "list_iap_localizations",
        "/v2/inAppPurchases/{iap_id}/inAppPurchaseLocalizations",
        "List localizations for an in-app purchase.",
    )
    .fields(&[IAP_ID, LIMIT]),
    Endpoint::create(
        "create_iap_localization",
        "/v1/inAppPurchaseLocalizations",
        "inAppPurchaseLocalizations",
        "Create a localization for an in-app purchase.",
    )
    .fields(&[
        Field::to_one("iap_id", "inAppPurchase", "inAppPurchases", "The in-app purchase ID"),
        Field::attr("locale", FieldKind::String, "The locale code (e.g., en-US, fr-FR)").required(),
        Field::attr("name", FieldKind::String, "Localized name of the in-app purchase").required(),
        Field::attr("description", FieldKind::String, "Localized description of the in-app purchase"),
    ]),
    Endpoint::update(
        "update_iap_localization",
        "/v1/inAppPurchaseLocalizations/{id}",
        "inAppPurchaseLocalizations",
        "Update a localization for an in-app purchase.",
    )
    .fields(&[
        Field::id("id", "The in-app purchase localization ID"),
        Field::attr("name", FieldKind::String, "Updated localized name"),
        Field::attr("description", FieldKind::String, "Updated localized description"),
    ]),
    Endpoint::delete(
        "delete_iap_localization",
        "/v1/inAppPurchaseLocalizations/{id}",
        "Deleted in-app purchase localization {id}",
        "Delete a localization for an in-app purchase.",
    )
    .fields(&[Field::path("id", "The in-app purchase localization ID to delete")]),
    Endpoint::get(
        "list_iap_price_points",
        "/v2/inAppPurchases/{iap_id}/pricePoints",
        "List price points for an in-app purchase, optionally filtered by territory.",
    )
    .fields(&[
        IAP_ID,
        Field::query("filter_territory", "filter[territory]", "Filter by territory code (e.g., USA, GBR)"),
        LIMIT,
    ]),
    Endpoint::create(
        "submit_iap_for_review",
        "/v1/inAppPurchaseSubmissions",
        "inAppPurchaseSubmissions",
        "Submit an in-app purchase for App Review.",
    )
    .fields(&[Field::to_one(
        "iap_id",
        "inAppPurchase",
        "inAppPurchases",
        "The in-app purchase ID to submit for review",
    )]),
];
