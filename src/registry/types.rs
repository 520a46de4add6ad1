use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{StreamRegistryError, StreamResult};

/// Parsed registration response from the stream registry
///
/// The registry may list one binding per region; only the first entry is
/// ever consulted by the builders, which matches the upstream contract for
/// a registration scoped to a single region.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamRegistration {
    #[serde(rename = "regionStreamConfigList")]
    pub region_stream_configs: Vec<RegionStreamConfig>,
}

/// One region binding: broker properties plus the topics backing the stream
#[derive(Debug, Clone, Deserialize)]
pub struct RegionStreamConfig {
    #[serde(rename = "streamConfiguration")]
    pub stream_configuration: HashMap<String, String>,
    pub topics: Vec<String>,
}

impl StreamRegistration {
    /// The first region binding, which is the only one the builders read
    pub fn primary(&self) -> StreamResult<&RegionStreamConfig> {
        self.region_stream_configs.first().ok_or_else(|| {
            StreamRegistryError::MalformedResponse(
                "registration contained no region stream configuration".to_string(),
            )
        })
    }
}
