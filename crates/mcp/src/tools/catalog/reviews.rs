//! Customer reviews and developer responses.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, Literal, FETCH_ALL, LIMIT};

const INCLUDE_RESPONSES: Field = Field::query(
    "include",
    "include",
    "Comma-separated related resources to include (default: customerReviewResponses)",
)
.with_default(Literal::Str("customerReviewResponses"));

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_customer_reviews",
        "/v1/apps/{app_id}/customerReviews",
        "List customer reviews for an app. Returns review text, rating, reviewer nickname, and creation date.",
    )
    .fields(&[
        Field::path("app_id", "The App Store Connect app ID"),
        Field::query("sort", "sort", "Sort field (e.g., -createdDate, createdDate, rating, -rating)"),
        INCLUDE_RESPONSES,
        LIMIT,
        FETCH_ALL,
    ]),
    Endpoint::get(
        "get_customer_review",
        "/v1/customerReviews/{id}",
        "Get a specific customer review by ID, including any developer responses.",
    )
    .fields(&[Field::path("id", "The customer review ID"), INCLUDE_RESPONSES]),
    Endpoint::create(
        "create_review_response",
        "/v1/customerReviewResponses",
        "customerReviewResponses",
        "Create a developer response to a customer review.",
    )
    .fields(&[
        Field::to_one("review_id", "review", "customerReviews", "The customer review ID to respond to"),
        Field::attr("responseBody", FieldKind::String, "The text of the developer response").required(),
    ]),
    Endpoint::update(
        "update_review_response",
        "/v1/customerReviewResponses/{id}",
        "customerReviewResponses",
        "Update an existing developer response to a customer review.",
    )
    .fields(&[
        Field::id("id", "The customer review response ID"),
        Field::attr("responseBody", FieldKind::String, "The updated response text").required(),
    ]),
    Endpoint::delete(
        "delete_review_response",
        "/v1/customerReviewResponses/{id}",
        "Deleted customer review response {id}",
        "Delete a developer response to a customer review.",
    )
    .fields(&[Field::path("id", "The customer review response ID to delete")]),
];
