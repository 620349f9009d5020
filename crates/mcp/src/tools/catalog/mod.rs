//! Endpoint descriptors for the App Store Connect API, one module per area.

use crate::tools::endpoint::Endpoint;

mod analytics;
mod app_clips;
mod app_events;
mod app_info;
mod apps;
mod beta_detail;
mod bundle_ids;
mod certificates;
mod compliance;
mod game_center;
mod in_app_purchases;
mod phased_releases;
mod pricing;
mod reviews;
mod sandbox;
mod screenshots;
mod subscriptions;
mod team;
mod testflight;
mod xcode_cloud;

/// Every group of endpoints, in registration order.
pub const GROUPS: &[(&str, &[Endpoint])] = &[
    ("apps", apps::ENDPOINTS),
    ("testflight", testflight::ENDPOINTS),
    ("bundle_ids", bundle_ids::ENDPOINTS),
    ("team", team::ENDPOINTS),
    ("reviews", reviews::ENDPOINTS),
    ("screenshots", screenshots::ENDPOINTS),
    ("analytics", analytics::ENDPOINTS),
    ("pricing", pricing::ENDPOINTS),
    ("beta_detail", beta_detail::ENDPOINTS),
    ("certificates", certificates::ENDPOINTS),
    ("app_info", app_info::ENDPOINTS),
    ("phased_releases", phased_releases::ENDPOINTS),
    ("in_app_purchases", in_app_purchases::ENDPOINTS),
    ("subscriptions", subscriptions::ENDPOINTS),
    ("game_center", game_center::ENDPOINTS),
    ("xcode_cloud", xcode_cloud::ENDPOINTS),
    ("app_clips", app_clips::ENDPOINTS),
    ("sandbox", sandbox::ENDPOINTS),
    ("compliance", compliance::ENDPOINTS),
    ("app_events", app_events::ENDPOINTS),
];

/// All endpoint descriptors.
pub fn all() -> impl Iterator<Item = &'static Endpoint> {
    GROUPS.iter().flat_map(|(_, endpoints)| endpoints.iter())
}

/// Look up a descriptor by tool name.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    all().find(|endpoint| endpoint.name == name)
}
