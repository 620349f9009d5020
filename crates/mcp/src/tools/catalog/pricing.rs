//! App price points, price schedules and territories.

use crate::tools::endpoint::{Endpoint, Field, Literal, LIMIT};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_app_price_points",
        "/v1/apps/{app_id}/appPricePoints",
        "List available price points for an app, optionally filtered by territory.",
    )
    .fields(&[
        Field::path("app_id", "The App Store Connect app ID"),
        Field::query("filter_territory", "filter[territory]", "Filter by territory code (e.g., USA, GBR, JPN)"),
        Field::query(
            "include",
            "include",
            "Comma-separated related resources to include (default: territory)",
        )
        .with_default(Literal::Str("territory")),
        LIMIT,
    ]),
    Endpoint::get(
        "get_app_price_schedule",
        "/v1/apps/{app_id}/appPriceSchedule",
        "Get the price schedule for an app, including manual and automatic prices.",
    )
    .fields(&[
        Field::path("app_id", "The App Store Connect app ID"),
        Field::query(
            "include",
            "include",
            "Comma-separated related resources to include (default: manualPrices,automaticPrices)",
        )
        .with_default(Literal::Str("manualPrices,automaticPrices")),
    ]),
    Endpoint::get(
        "list_territories",
        "/v1/territories",
        "List all available App Store territories (countries/regions).",
    )
    .fields(&[LIMIT]),
];
