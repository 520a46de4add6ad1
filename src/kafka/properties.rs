use rdkafka::config::ClientConfig;
use std::collections::HashMap;

/// Property key the registry supplies for schema-aware clients
///
/// librdkafka rejects configuration keys it does not know, so this key has
/// to be removed before a property map reaches [`ClientConfig`]. The
/// schema-aware wrappers retain it instead.
pub const SCHEMA_REGISTRY_URL: &str = "schema.registry.url";

/// Merges registry-supplied properties with caller-supplied overrides
///
/// User entries are written first, registry entries on top, so on a key
/// collision the registry's value wins. Callers therefore cannot override a
/// registry-pinned property. This mirrors the behavior of the upstream
/// registry clients; whether it is intentional is an open product question,
/// so it is preserved as-is.
pub fn merge_properties(
    registry_props: Option<&HashMap<String, String>>,
    user_props: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut properties = HashMap::new();
    if let Some(user) = user_props {
        for (k, v) in user {
            properties.insert(k.clone(), v.clone());
        }
    }
    if let Some(registry) = registry_props {
        for (k, v) in registry {
            properties.insert(k.clone(), v.clone());
        }
    }
    properties
}

/// Removes `schema.registry.url` from a property map and hands it back
///
/// This is the explicit strip step that keeps plain rdkafka clients from
/// seeing a key they would refuse; absent keys are tolerated.
pub fn take_schema_registry_url(properties: &mut HashMap<String, String>) -> Option<String> {
    properties.remove(SCHEMA_REGISTRY_URL)
}

/// Builds an rdkafka [`ClientConfig`] from a resolved property map
pub(crate) fn to_client_config(properties: &HashMap<String, String>) -> ClientConfig {
    let mut config = ClientConfig::new();
    for (key, value) in properties {
        config.set(key, value);
    }
    config
}
