//! Sandbox testers.

use crate::tools::endpoint::{Endpoint, Field, FieldKind};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_sandbox_testers",
        "/v2/sandboxTesters",
        "List sandbox testers for App Store Connect.",
    ),
    Endpoint::update(
        "update_sandbox_tester",
        "/v2/sandboxTesters/{id}",
        "sandboxTesters",
        "Update a sandbox tester's settings.",
    )
    .fields(&[
        Field::id("id", "The sandbox tester ID"),
        Field::attr(
            "territory",
            FieldKind::String,
            "Territory code for the sandbox tester (e.g., USA, GBR)",
        ),
        Field::attr(
            "interruptPurchases",
            FieldKind::Boolean,
            "Whether to interrupt purchases for testing",
        ),
        Field::attr(
            "subscriptionRenewalRate",
            FieldKind::String,
            "Subscription renewal rate for testing",
        ),
    ]),
    Endpoint::create(
        "clear_sandbox_tester_purchase_history",
        "/v2/sandboxTestersClearPurchaseHistoryRequest",
        "sandboxTestersClearPurchaseHistoryRequest",
        "Clear purchase history for one or more sandbox testers.",
    )
    .fields(&[Field::to_many(
        "tester_ids",
        "sandboxTesters",
        "sandboxTesters",
        "Array of sandbox tester IDs to clear purchase history for",
    )
    .required()]),
];
