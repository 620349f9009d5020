pub mod catalog;
pub mod endpoint;
pub mod generic;
mod registry;

pub use endpoint::{ArgumentError, Endpoint, EndpointTool};
pub use generic::ApiRequestTool;
pub use registry::{
    json_schema_array, json_schema_boolean, json_schema_enum, json_schema_map,
    json_schema_number, json_schema_object, json_schema_string, Tool, ToolRegistry, ToolTier,
};

use asc_sdk::ApiExecutor;
use std::sync::Arc;
use tracing::info;

/// Register every catalog endpoint plus the passthrough tool. In read-only
/// mode only Tier0 tools are registered and `api_request` is limited to GET.
pub fn build_registry(executor: Arc<dyn ApiExecutor>, read_only: bool) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    for endpoint in catalog::all() {
        if read_only && endpoint.tier() != ToolTier::Tier0 {
            continue;
        }
        registry.register(Arc::new(EndpointTool::new(endpoint, executor.clone())));
    }
    registry.register(Arc::new(ApiRequestTool::new(executor).read_only(read_only)));

    let [reads, writes, destructive] = registry.tier_counts();
    info!(
        tools = registry.len(),
        reads, writes, destructive, read_only, "Tool registry ready"
    );
    registry
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingExecutor;
    use super::*;

    #[test]
    fn test_full_registry() {
        let registry = build_registry(Arc::new(RecordingExecutor::new()), false);

        assert_eq!(registry.len(), 162);
        assert!(registry.contains("api_request"));
        assert!(registry.contains("delete_profile"));
        assert_eq!(registry.get("api_request").unwrap().tier(), ToolTier::Tier2);

        let [reads, writes, destructive] = registry.tier_counts();
        assert_eq!(reads + writes + destructive, 162);
    }

    #[test]
    fn test_read_only_registry() {
        let registry = build_registry(Arc::new(RecordingExecutor::new()), true);

        assert!(registry.contains("list_apps"));
        assert!(registry.contains("api_request"));
        assert!(!registry.contains("create_app"));
        assert!(!registry.contains("delete_profile"));
        assert!(!registry.contains("remove_tester_from_beta_group"));

        let [reads, writes, destructive] = registry.tier_counts();
        assert_eq!((writes, destructive), (0, 0));
        assert_eq!(reads, catalog::all().filter(|e| e.tier() == ToolTier::Tier0).count() + 1);
    }
}
