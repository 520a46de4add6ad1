//! HTTP client for the stream registry service
//!
//! Registers a consumer or producer for a (stream, app, region) triple with
//! a single PUT and returns the parsed binding. No retries, no caching; the
//! request timeout is whatever the underlying HTTP client defaults to.

use log::{debug, error};
use reqwest::Client;

use crate::error::{StreamRegistryError, StreamResult};
use crate::registry::config::RegistryConfig;
use crate::registry::types::StreamRegistration;

/// Which side of the stream is being registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegistryRole {
    Consumers,
    Producers,
}

impl RegistryRole {
    fn as_str(&self) -> &'static str {
        match self {
            RegistryRole::Consumers => "consumers",
            RegistryRole::Producers => "producers",
        }
    }
}

/// Client for the stream registry REST API
///
/// Holds only a [`reqwest::Client`], so it is cheap to clone and safe to
/// share across tasks; every call is an independent round-trip.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http_client: Client,
}

impl RegistryClient {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    /// Uses a caller-provided HTTP client, e.g. one with a proxy or timeout
    pub fn with_http_client(http_client: Client) -> Self {
        Self { http_client }
    }

    /// Registers a consumer for `stream_name` and returns the binding
    ///
    /// Fails with `InvalidConfiguration` before any network call if the
    /// config or stream name is incomplete, and with `RegistrationFailed`
    /// if the registry answers with a non-success status or is unreachable.
    pub async fn register_consumer(
        &self,
        config: &RegistryConfig,
        stream_name: &str,
    ) -> StreamResult<StreamRegistration> {
        self.register(config, stream_name, RegistryRole::Consumers)
            .await
    }

    /// Registers a producer for `stream_name` and returns the binding
    pub async fn register_producer(
        &self,
        config: &RegistryConfig,
        stream_name: &str,
    ) -> StreamResult<StreamRegistration> {
        self.register(config, stream_name, RegistryRole::Producers)
            .await
    }

    async fn register(
        &self,
        config: &RegistryConfig,
        stream_name: &str,
        role: RegistryRole,
    ) -> StreamResult<StreamRegistration> {
        config.validate().map_err(|e| {
            error!("Rejected registry call: {}", e);
            e
        })?;
        if stream_name.is_empty() {
            error!("The name of the stream is required");
            return Err(StreamRegistryError::InvalidConfiguration(
                "the name of the stream is required".to_string(),
            ));
        }

        let request_url = format!(
            "{}/v0/streams/{}/{}/{}/regions/{}",
            config.base_url.trim_end_matches('/'),
            stream_name,
            role.as_str(),
            config.app_name,
            config.region
        );
        debug!("Registering {} via {}", role.as_str(), request_url);

        let response = self
            .http_client
            .put(&request_url)
            .send()
            .await
            .map_err(|e| {
                error!("Unable to reach the stream registry: {}", e);
                StreamRegistryError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Unable to register {} with the stream registry: {} {}",
                role.as_str(),
                status,
                body
            );
            return Err(StreamRegistryError::RegistrationFailed {
                status: Some(status.as_u16()),
                message: body,
            });
        }

        response
            .json::<StreamRegistration>()
            .await
            .map_err(|e| StreamRegistryError::MalformedResponse(e.to_string()))
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}
