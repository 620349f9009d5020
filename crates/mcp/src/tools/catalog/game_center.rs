//! Game Center details, leaderboards, achievements, leaderboard sets and groups.

use crate::tools::endpoint::{Endpoint, Field, FieldKind, LIMIT};

const FORMATTERS: FieldKind = FieldKind::Enum(&[
    "INTEGER",
    "DECIMAL_POINT_1",
    "DECIMAL_POINT_2",
    "DECIMAL_POINT_3",
    "ELAPSED_TIME",
    "MONEY",
]);

const SUBMISSION_TYPES: FieldKind = FieldKind::Enum(&["BEST_SCORE", "MOST_RECENT_SCORE"]);

const SORT_TYPES: FieldKind = FieldKind::Enum(&["ASC", "DESC"]);

const POINTS: FieldKind = FieldKind::Number { min: None, max: None };

const DETAIL_ID: Field = Field::path("detail_id", "The Game Center detail ID");

const fn detail(description: &'static str) -> Field {
    Field::to_one("detail_id", "gameCenterDetail", "gameCenterDetails", description)
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::get(
        "get_game_center_detail",
        "/v1/apps/{app_id}/gameCenterDetail",
        "Get Game Center detail for an app, including leaderboards, achievements, leaderboard sets, and groups.",
    )
    .fields(&[Field::path("app_id", "The App Store Connect app ID")])
    .fixed_query(&[(
        "include",
        "gameCenterAppVersions,gameCenterGroup,gameCenterLeaderboards,gameCenterLeaderboardSets,gameCenterAchievements",
    )]),
    Endpoint::get(
        "list_game_center_leaderboards",
        "/v1/gameCenterDetails/{detail_id}/gameCenterLeaderboards",
        "List Game Center leaderboards for a Game Center detail.",
    )
    .fields(&[DETAIL_ID, LIMIT]),
    Endpoint::create(
        "create_game_center_leaderboard",
        "/v1/gameCenterLeaderboards",
        "gameCenterLeaderboards",
        "Create a new Game Center leaderboard.",
    )
    .fields(&[
        detail("The Game Center detail ID to associate this leaderboard with"),
        Field::attr("defaultFormatter", FORMATTERS, "The default formatter for leaderboard scores").required(),
        Field::attr("referenceName", FieldKind::String, "A reference name for the leaderboard").required(),
        Field::attr(
            "vendorIdentifier",
            FieldKind::String,
            "A unique vendor identifier for the leaderboard",
        )
        .required(),
        Field::attr("submissionType", SUBMISSION_TYPES, "How scores are submitted").required(),
        Field::attr("scoreSortType", SORT_TYPES, "Sort order for scores").required(),
        Field::attr("scoreRangeStart", FieldKind::String, "Start of the score range"),
        Field::attr("scoreRangeEnd", FieldKind::String, "End of the score range"),
        Field::attr(
            "recurrenceStartDate",
            FieldKind::String,
            "Start date for recurring leaderboard (ISO 8601)",
        ),
        Field::attr("recurrenceDuration", FieldKind::String, "Duration of each recurrence period"),
        Field::attr("recurrenceRule", FieldKind::String, "Recurrence rule for the leaderboard"),
    ]),
    Endpoint::update(
        "update_game_center_leaderboard",
        "/v1/gameCenterLeaderboards/{id}",
        "gameCenterLeaderboards",
        "Update an existing Game Center leaderboard.",
    )
    .fields(&[
        Field::id("id", "The Game Center leaderboard ID"),
        Field::attr("defaultFormatter", FORMATTERS, "Updated default formatter"),
        Field::attr("referenceName", FieldKind::String, "Updated reference name"),
        Field::attr("submissionType", SUBMISSION_TYPES, "Updated submission type"),
        Field::attr("scoreSortType", SORT_TYPES, "Updated sort order"),
        Field::attr("scoreRangeStart", FieldKind::String, "Updated start of score range"),
        Field::attr("scoreRangeEnd", FieldKind::String, "Updated end of score range"),
        Field::attr("recurrenceStartDate", FieldKind::String, "Updated recurrence start date"),
        Field::attr("recurrenceDuration", FieldKind::String, "Updated recurrence duration"),
        Field::attr("recurrenceRule", FieldKind::String, "Updated recurrence rule"),
    ]),
    Endpoint::delete(
        "delete_game_center_leaderboard",
        "/v1/gameCenterLeaderboards/{id}",
        "Deleted Game Center leaderboard {id}",
        "Delete a Game Center leaderboard.",
    )
    .fields(&[Field::path("id", "The Game Center leaderboard ID to delete")]),
    Endpoint::get(
        "list_game_center_achievements",
        "/v1/gameCenterDetails/{detail_id}/gameCenterAchievements",
        "List Game Center achievements for a Game Center detail.",
    )
    .fields(&[DETAIL_ID, LIMIT]),
    Endpoint::create(
        "create_game_center_achievement",
        "/v1/gameCenterAchievements",
        "gameCenterAchievements",
        "Create a new Game Center achievement.",
    )
    .fields(&[
        detail("The Game Center detail ID to associate this achievement with"),
        Field::attr("referenceName", FieldKind::String, "A reference name for the achievement").required(),
        Field::attr(
            "vendorIdentifier",
            FieldKind::String,
            "A unique vendor identifier for the achievement",
        )
        .required(),
        Field::attr("points", POINTS, "Point value of the achievement").required(),
        Field::attr(
            "showBeforeEarned",
            FieldKind::Boolean,
            "Whether to show the achievement before it is earned",
        )
        .required(),
        Field::attr(
            "repeatable",
            FieldKind::Boolean,
            "Whether the achievement can be earned multiple times",
        )
        .required(),
    ]),
    Endpoint::update(
        "update_game_center_achievement",
        "/v1/gameCenterAchievements/{id}",
        "gameCenterAchievements",
        "Update an existing Game Center achievement.",
    )
    .fields(&[
        Field::id("id", "The Game Center achievement ID"),
        Field::attr("referenceName", FieldKind::String, "Updated reference name"),
        Field::attr("points", POINTS, "Updated point value"),
        Field::attr("showBeforeEarned", FieldKind::Boolean, "Updated show before earned setting"),
        Field::attr("repeatable", FieldKind::Boolean, "Updated repeatable setting"),
    ]),
    Endpoint::delete(
        "delete_game_center_achievement",
        "/v1/gameCenterAchievements/{id}",
        "Deleted Game Center achievement {id}",
        "Delete a Game Center achievement.",
    )
    .fields(&[Field::path("id", "The Game Center achievement ID to delete")]),
    Endpoint::get(
        "list_game_center_leaderboard_sets",
        "/v1/gameCenterDetails/{detail_id}/gameCenterLeaderboardSets",
        "List Game Center leaderboard sets for a Game Center detail.",
    )
    .fields(&[DETAIL_ID, LIMIT]),
    Endpoint::create(
        "create_game_center_leaderboard_set",
        "/v1/gameCenterLeaderboardSets",
        "gameCenterLeaderboardSets",
        "Create a new Game Center leaderboard set.",
    )
    .fields(&[
        detail("The Game Center detail ID to associate this leaderboard set with"),
        Field::attr("referenceName", FieldKind::String, "A reference name for the leaderboard set").required(),
        Field::attr(
            "vendorIdentifier",
            FieldKind::String,
            "A unique vendor identifier for the leaderboard set",
        )
        .required(),
    ]),
    Endpoint::delete(
        "delete_game_center_leaderboard_set",
        "/v1/gameCenterLeaderboardSets/{id}",
        "Deleted Game Center leaderboard set {id}",
        "Delete a Game Center leaderboard set.",
    )
    .fields(&[Field::path("id", "The Game Center leaderboard set ID to delete")]),
    Endpoint::get(
        "list_game_center_groups",
        "/v1/gameCenterGroups",
        "List Game Center groups, including their Game Center details.",
    )
    .fields(&[LIMIT])
    .fixed_query(&[("include", "gameCenterDetails")]),
    Endpoint::create(
        "create_game_center_group",
        "/v1/gameCenterGroups",
        "gameCenterGroups",
        "Create a new Game Center group.",
    )
    .fields(&[Field::attr("referenceName", FieldKind::String, "A reference name for the group").required()]),
];
