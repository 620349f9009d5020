//! Auto-renewable subscriptions, their groups, localizations, prices and offers.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, LIMIT};

const PERIODS: FieldKind = FieldKind::Enum(&[
    "ONE_WEEK",
    "ONE_MONTH",
    "TWO_MONTHS",
    "THREE_MONTHS",
    "SIX_MONTHS",
    "ONE_YEAR",
]);

const OFFER_MODES: FieldKind = FieldKind::Enum(&["PAY_AS_YOU_GO", "PAY_UP_FRONT", "FREE_TRIAL"]);

const COUNT: FieldKind = FieldKind::Number { min: None, max: None };

const SUB_ID: Field = Field::path("sub_id", "The subscription ID");

const fn subscription() -> Field {
    Field::to_one("sub_id", "subscription", "subscriptions", "The subscription ID")
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_subscription_groups",
        "/v1/apps/{app_id}/subscriptionGroups",
        "List subscription groups for an app.",
    )
    .fields(&[
        Field::path("app_id", "The App Store Connect app ID"),
        Field::query(
            "include",
            "include",
            "Comma-separated related resources to include (e.g., subscriptions,subscriptionGroupLocalizations)",
        ),
        LIMIT,
    ]),
    Endpoint::create(
        "create_subscription_group",
        "/v1/subscriptionGroups",
        "subscriptionGroups",
        "Create a new subscription group for an app.",
    )
    .fields(&[
        Field::to_one("app_id", "app", "apps", "The App Store Connect app ID"),
        Field::attr(
            "referenceName",
            FieldKind::String,
            "A reference name for the subscription group",
        )
        .required(),
    ]),
    Endpoint::get(
        "get_subscription_group",
        "/v1/subscriptionGroups/{id}",
        "Get details of a specific subscription group.",
    )
    .fields(&[
        Field::path("id", "The subscription group ID"),
        Field::query(
            "include",
            "include",
            "Comma-separated related resources to include (e.g., subscriptions,subscriptionGroupLocalizations)",
        ),
    ]),
    Endpoint::get(
        "list_subscriptions",
        "/v1/subscriptionGroups/{group_id}/subscriptions",
        "List subscriptions within a subscription group.",
    )
    .fields(&[
        Field::path("group_id", "The subscription group ID"),
        Field::query(
            "include",
            "include",
            "Comma-separated related resources to include (e.g., subscriptionLocalizations,subscriptionAvailability)",
        ),
        LIMIT,
    ]),
    Endpoint::create(
        "create_subscription",
        "/v1/subscriptions",
        "subscriptions",
        "Create a new subscription within a subscription group.",
    )
    .fields(&[
        Field::to_one("group_id", "group", "subscriptionGroups", "The subscription group ID"),
        Field::attr("name", FieldKind::String, "The name of the subscription").required(),
        Field::attr("productId", FieldKind::String, "A unique product ID for the subscription").required(),
        Field::attr("subscriptionPeriod", PERIODS, "The subscription renewal period").required(),
        Field::attr("familySharable", FieldKind::Boolean, "Whether the subscription is family sharable"),
        Field::attr("reviewNote", FieldKind::String, "Review note for App Review"),
        Field::attr(
            "groupLevel",
            COUNT,
            "The level of the subscription within the group (1 is highest)",
        ),
    ]),
    Endpoint::update(
        "update_subscription",
        "/v1/subscriptions/{id}",
        "subscriptions",
        "Update an existing subscription.",
    )
    .fields(&[
        Field::id("id", "The subscription ID"),
        Field::attr("name", FieldKind::String, "Updated name"),
        Field::attr("familySharable", FieldKind::Boolean, "Whether the subscription is family sharable"),
        Field::attr("subscriptionPeriod", PERIODS, "Updated subscription renewal period"),
        Field::attr("reviewNote", FieldKind::String, "Updated review note for App Review"),
        Field::attr("groupLevel", COUNT, "Updated level within the subscription group"),
    ]),
    Endpoint::delete(
        "delete_subscription",
        "/v1/subscriptions/{id}",
        "Deleted subscription {id}",
        "Delete a subscription.",
    )
    .fields(&[Field::path("id", "The subscription ID to delete")]),
    Endpoint::get(
        "list_subscription_localizations",
        "/v1/subscriptions/{sub_id}/subscriptionLocalizations",
        "List localizations for a subscription.",
    )
    .fields(&[SUB_ID, LIMIT]),
    Endpoint::create(
        "create_subscription_localization",
        "/v1/subscriptionLocalizations",
        "subscriptionLocalizations",
        "Create a localization for a subscription.",
    )
    .fields(&[
        subscription(),
        Field::attr("locale", FieldKind::String, "The locale code (e.g., en-US, fr-FR)").required(),
        Field::attr("name", FieldKind::String, "Localized name of the subscription").required(),
        Field::attr("description", FieldKind::String, "Localized description of the subscription"),
    ]),
    Endpoint::update(
        "update_subscription_localization",
        "/v1/subscriptionLocalizations/{id}",
        "subscriptionLocalizations",
        "Update a localization for a subscription.",
    )
    .fields(&[
        Field::id("id", "The subscription localization ID"),
        Field::attr("name", FieldKind::String, "Updated localized name"),
        Field::attr("description", FieldKind::String, "Updated localized description"),
    ]),
    Endpoint::delete(
        "delete_subscription_localization",
        "/v1/subscriptionLocalizations/{id}",
        "Deleted subscription localization {id}",
        "Delete a localization for a subscription.",
    )
    .fields(&[Field::path("id", "The subscription localization ID to delete")]),
    Endpoint::get(
        "list_subscription_prices",
        "/v1/subscriptions/{sub_id}/prices",
        "List prices for a subscription, including territory info.",
    )
    .fields(&[
        SUB_ID,
        Field::query(
            "include",
            "include",
            "Comma-separated related resources to include (e.g., territory)",
        ),
        LIMIT,
    ]),
    Endpoint::get(
        "list_subscription_price_points",
        "/v1/subscriptions/{sub_id}/pricePoints",
        "List price points for a subscription, optionally filtered by territory.",
    )
    .fields(&[
        SUB_ID,
        Field::query("filter_territory", "filter[territory]", "Filter by territory code (e.g., USA, GBR)"),
        LIMIT,
    ]),
    Endpoint::create(
        "create_subscription_introductory_offer",
        "/v1/subscriptionIntroductoryOffers",
        "subscriptionIntroductoryOffers",
        "Create an introductory offer for a subscription.",
    )
    .fields(&[
        subscription(),
        Field::to_one("territory_id", "territory", "territories", "The territory ID for this offer"),
        Field::attr("duration", PERIODS, "Duration of the introductory offer period").required(),
        Field::attr("offerMode", OFFER_MODES, "The offer mode").required(),
        Field::attr("numberOfPeriods", COUNT, "Number of periods the offer is valid for").required(),
        Field::attr("startDate", FieldKind::String, "Start date for the offer (YYYY-MM-DD)"),
        Field::attr("endDate", FieldKind::String, "End date for the offer (YYYY-MM-DD)"),
    ]),
    Endpoint::create(
        "submit_subscription_group",
        "/v1/subscriptionGroupSubmissions",
        "subscriptionGroupSubmissions",
        "Submit a subscription group for App Review.",
    )
    .fields(&[Field::to_one(
        "subscription_group_id",
        "subscriptionGroup",
        "subscriptionGroups",
        "The subscription group ID to submit for review",
    )]),
];
