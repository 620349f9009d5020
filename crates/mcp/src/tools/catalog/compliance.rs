//! Export compliance declarations and end user license agreements.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, LIMIT};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_app_encryption_declarations",
        "/v1/apps/{app_id}/appEncryptionDeclarations",
        "List app encryption declarations for an app.",
    )
    .fields(&[Field::path("app_id", "The App Store Connect app ID"), LIMIT]),
    Endpoint::create(
        "create_app_encryption_declaration",
        "/v1/appEncryptionDeclarations",
        "appEncryptionDeclarations",
        "Create an app encryption declaration for an app.",
    )
    .fields(&[
        Field::to_one("app_id", "app", "apps", "The App Store Connect app ID"),
        Field::attr(
            "availableOnFrenchStore",
            FieldKind::Boolean,
            "Whether the app is available on the French App Store",
        )
        .required(),
        Field::attr(
            "containsProprietaryCryptography",
            FieldKind::Boolean,
            "Whether the app contains proprietary cryptography",
        )
        .required(),
        Field::attr(
            "containsThirdPartyCryptography",
            FieldKind::Boolean,
            "Whether the app contains third-party cryptography",
        )
        .required(),
        Field::attr("platform", FieldKind::String, "The platform (e.g., IOS, MAC_OS)").required(),
        Field::attr("usesEncryption", FieldKind::Boolean, "Whether the app uses encryption").required(),
        Field::attr(
            "isExempt",
            FieldKind::Boolean,
            "Whether the app is exempt from encryption regulations",
        )
        .required(),
        Field::attr("codeValue", FieldKind::String, "The encryption code value"),
    ]),
    Endpoint::get(
        "get_app_encryption_declaration",
        "/v1/appEncryptionDeclarations/{id}",
        "Get details of a specific app encryption declaration.",
    )
    .fields(&[Field::path("id", "The app encryption declaration ID")]),
    Endpoint::get(
        "list_eulas",
        "/v1/apps/{app_id}/endUserLicenseAgreement",
        "Get the end user license agreement for an app.",
    )
    .fields(&[Field::path("app_id", "The App Store Connect app ID")]),
    Endpoint::create(
        "create_eula",
        "/v1/endUserLicenseAgreements",
        "endUserLicenseAgreements",
        "Create an end user license agreement for an app.",
    )
    .fields(&[
        Field::attr("agreementText", FieldKind::String, "The EULA agreement text").required(),
        Field::to_one("app_id", "app", "apps", "The App Store Connect app ID"),
        Field::to_many(
            "territory_ids",
            "territories",
            "territories",
            "Array of territory IDs this EULA applies to",
        ),
    ]),
    Endpoint::update(
        "update_eula",
        "/v1/endUserLicenseAgreements/{id}",
        "endUserLicenseAgreements",
        "Update an end user license agreement.",
    )
    .fields(&[
        Field::id("id", "The EULA ID"),
        Field::attr("agreementText", FieldKind::String, "Updated EULA agreement text"),
    ]),
    Endpoint::delete(
        "delete_eula",
        "/v1/endUserLicenseAgreements/{id}",
        "Deleted end user license agreement {id}",
        "Delete an end user license agreement.",
    )
    .fields(&[Field::path("id", "The EULA ID to delete")]),
];
