use crate::error::{StreamRegistryError, StreamResult};

/// Connection parameters for the stream registry service
///
/// Supplied by the caller on every registration call; nothing is cached
/// between calls. All three fields are required and must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Base URL of the registry, e.g. "http://streamregistry.example.com"
    pub base_url: String,
    /// Deployment region the application is running in
    pub region: String,
    /// Name of the consuming or producing application
    pub app_name: String,
}

impl RegistryConfig {
    pub fn new(
        base_url: impl Into<String>,
        region: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            region: region.into(),
            app_name: app_name.into(),
        }
    }

    /// Rejects missing fields before any network call is attempted
    pub(crate) fn validate(&self) -> StreamResult<()> {
        if self.base_url.is_empty() {
            return Err(StreamRegistryError::InvalidConfiguration(
                "a base_url configuration parameter is required".to_string(),
            ));
        }
        if self.region.is_empty() {
            return Err(StreamRegistryError::InvalidConfiguration(
                "the current running region needs to be identified".to_string(),
            ));
        }
        if self.app_name.is_empty() {
            return Err(StreamRegistryError::InvalidConfiguration(
                "the name of the application needs to be defined".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = RegistryConfig::new("http://registry:8080", "us-east-1", "orders-svc");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        let cases = [
            RegistryConfig::new("", "us-east-1", "orders-svc"),
            RegistryConfig::new("http://registry:8080", "", "orders-svc"),
            RegistryConfig::new("http://registry:8080", "us-east-1", ""),
        ];
        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(StreamRegistryError::InvalidConfiguration(_))
            ));
        }
    }
}
