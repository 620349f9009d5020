//! App infos, their localizations, categories and age ratings.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, LIMIT};

const INTENSITY: FieldKind = FieldKind::Enum(&["NONE", "INFREQUENT_OR_MILD", "FREQUENT_OR_INTENSE"]);

const KIDS_AGE_BANDS: &[&str] = &["FIVE_AND_UNDER", "SIX_TO_EIGHT", "NINE_TO_ELEVEN"];

const fn category(name: &'static str, rel: &'static str, description: &'static str) -> Field {
    Field::nullable_to_one(name, rel, "appCategories", description)
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "list_app_infos",
        "/v1/apps/{app_id}/appInfos",
        "List all app infos for an app. Each app info represents a version-specific set of metadata.",
    )
    .fields(&[
        Field::path("app_id", "The App Store Connect app ID"),
        Field::query(
            "include",
            "include",
            "Comma-separated includes (e.g., appInfoLocalizations,primaryCategory,secondaryCategory)",
        ),
        LIMIT,
    ]),
    Endpoint::get(
        "get_app_info",
        "/v1/appInfos/{id}",
        "Get a specific app info by ID, optionally including localizations.",
    )
    .fields(&[
        Field::path("id", "The app info ID"),
        Field::query("include", "include", "Comma-separated includes (e.g., appInfoLocalizations)"),
    ]),
    Endpoint::update(
        "update_app_info",
        "/v1/appInfos/{id}",
        "appInfos",
        "Update an app info's category relationships (primary/secondary categories and subcategories). \
         Pass an empty string to clear a category.",
    )
    .fields(&[
        Field::id("id", "The app info ID"),
        category("primaryCategory_id", "primaryCategory", "App category ID for the primary category"),
        category(
            "primarySubcategoryOne_id",
            "primarySubcategoryOne",
            "App category ID for primary subcategory one",
        ),
        category(
            "primarySubcategoryTwo_id",
            "primarySubcategoryTwo",
            "App category ID for primary subcategory two",
        ),
        category("secondaryCategory_id", "secondaryCategory", "App category ID for the secondary category"),
        category(
            "secondarySubcategoryOne_id",
            "secondarySubcategoryOne",
            "App category ID for secondary subcategory one",
        ),
        category(
            "secondarySubcategoryTwo_id",
            "secondarySubcategoryTwo",
            "App category ID for secondary subcategory two",
        ),
    ]),
    Endpoint::get(
        "list_app_info_localizations",
        "/v1/appInfos/{app_info_id}/appInfoLocalizations",
        "List all localizations for an app info (name, subtitle, privacy policy per locale).",
    )
    .fields(&[Field::path("app_info_id", "The app info ID"), LIMIT]),
    Endpoint::update(
        "update_app_info_localization",
        "/v1/appInfoLocalizations/{id}",
        "appInfoLocalizations",
        "Update an app info localization (name, subtitle, privacy policy URL/text).",
    )
    .fields(&[
        Field::id("id", "The app info localization ID"),
        Field::attr("name", FieldKind::String, "App name for this locale"),
        Field::attr("subtitle", FieldKind::String, "App subtitle for this locale"),
        Field::attr("privacyPolicyUrl", FieldKind::String, "Privacy policy URL"),
        Field::attr("privacyChoicesUrl", FieldKind::String, "Privacy choices URL"),
        Field::attr("privacyPolicyText", FieldKind::String, "Privacy policy text"),
    ]),
    Endpoint::get(
        "list_app_categories",
        "/v1/appCategories",
        "List App Store categories, optionally filtered by platform and including subcategories.",
    )
    .fields(&[
        Field::query(
            "filter_platforms",
            "filter[platforms]",
            "Filter by platforms (e.g., IOS, MAC_OS, TV_OS)",
        ),
        Field::query("include", "include", "Comma-separated includes (e.g., subcategories)"),
        LIMIT,
    ]),
    Endpoint::get(
        "list_age_rating_declarations",
        "/v1/appInfos/{app_info_id}/ageRatingDeclaration",
        "Get the age rating declaration for an app info.",
    )
    .fields(&[Field::path("app_info_id", "The app info ID")]),
    Endpoint::update(
        "update_age_rating_declaration",
        "/v1/ageRatingDeclarations/{id}",
        "ageRatingDeclarations",
        "Update the age rating declaration for an app. Values are NONE, INFREQUENT_OR_MILD, or FREQUENT_OR_INTENSE unless otherwise noted.",
    )
    .fields(&[
        Field::id("id", "The age rating declaration ID"),
        Field::attr(
            "alcoholTobaccoOrDrugUseOrReferences",
            INTENSITY,
            "Alcohol, tobacco, or drug use or references",
        ),
        Field::attr("contests", INTENSITY, "Contests"),
        Field::attr("gamblingSimulated", INTENSITY, "Simulated gambling"),
        Field::attr("gambling", FieldKind::Boolean, "Real gambling"),
        Field::attr("horrorOrFearThemes", INTENSITY, "Horror or fear themes"),
        Field::attr("matureOrSuggestiveThemes", INTENSITY, "Mature or suggestive themes"),
        Field::attr("medicalOrTreatmentInformation", INTENSITY, "Medical or treatment information"),
        Field::attr("profanityOrCrudeHumor", INTENSITY, "Profanity or crude humor"),
        Field::attr("sexualContentGraphicAndNudity", INTENSITY, "Sexual content - graphic and nudity"),
        Field::attr("sexualContentOrNudity", INTENSITY, "Sexual content or nudity"),
        Field::attr("violenceCartoonOrFantasy", INTENSITY, "Cartoon or fantasy violence"),
        Field::attr("violenceRealistic", INTENSITY, "Realistic violence"),
        Field::attr(
            "violenceRealisticProlongedGraphicOrSadistic",
            INTENSITY,
            "Realistic prolonged graphic or sadistic violence",
        ),
        Field::attr(
            "kidsAgeBand",
            FieldKind::Enum(KIDS_AGE_BANDS),
            "Kids age band (for Made for Kids apps)",
        ),
        Field::attr("gamblingAndContests", FieldKind::Boolean, "Gambling and contests"),
        Field::attr("unrestrictedWebAccess", FieldKind::Boolean, "Unrestricted web access"),
        Field::attr("seventeenPlus", FieldKind::Boolean, "17+ rating"),
    ]),
];
