//! Registry-driven Kafka producer construction
//!
//! Producers bind to a single topic: the first one the registry lists for
//! the stream. The plain variant drops the schema registry URL before the
//! properties reach librdkafka; the Avro variant parses the caller's key
//! and value schemas up front and keeps the URL.

use apache_avro::Schema;
use log::{error, info};
use rdkafka::producer::FutureProducer;
use std::collections::HashMap;

use crate::error::{StreamRegistryError, StreamResult};
use crate::kafka::avro::AvroProducer;
use crate::kafka::properties::{merge_properties, take_schema_registry_url, to_client_config};
use crate::registry::{RegionStreamConfig, RegistryClient, RegistryConfig};

/// Builder for a stream-registry backed Kafka producer
pub struct ProducerBuilder {
    registry_config: RegistryConfig,
    stream_name: String,
    properties: Option<HashMap<String, String>>,
    key_schema: Option<String>,
    value_schema: Option<String>,
}

impl ProducerBuilder {
    pub fn new(registry_config: RegistryConfig, stream_name: impl Into<String>) -> Self {
        Self {
            registry_config,
            stream_name: stream_name.into(),
            properties: None,
            key_schema: None,
            value_schema: None,
        }
    }

    /// Kafka producer properties merged with the registry's defaults
    ///
    /// Note the registry's value wins when both sides set the same key.
    pub fn properties(mut self, properties: HashMap<String, String>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Avro schema (AVSC) for message keys; required by [`Self::create_avro`]
    pub fn key_schema(mut self, schema: impl Into<String>) -> Self {
        self.key_schema = Some(schema.into());
        self
    }

    /// Avro schema (AVSC) for message values; required by
    /// [`Self::create_avro`]
    pub fn value_schema(mut self, schema: impl Into<String>) -> Self {
        self.value_schema = Some(schema.into());
        self
    }

    /// Registers the producer and builds a plain producer
    ///
    /// Returns the producer together with the stream's topic.
    pub async fn create(self, client: &RegistryClient) -> StreamResult<(FutureProducer, String)> {
        let registration = client
            .register_producer(&self.registry_config, &self.stream_name)
            .await?;
        let binding = registration.primary()?;

        let mut properties =
            merge_properties(Some(&binding.stream_configuration), self.properties.as_ref());
        take_schema_registry_url(&mut properties);

        let producer: FutureProducer = to_client_config(&properties).create()?;
        let topic = primary_topic(binding)?;
        Ok((producer, topic))
    }

    /// Registers the producer and builds an Avro producer bound to the
    /// configured key and value schemas
    ///
    /// Both schemas must be set; they are parsed before the registry is
    /// contacted, so a missing or malformed schema never causes a
    /// registration.
    pub async fn create_avro(self, client: &RegistryClient) -> StreamResult<(AvroProducer, String)> {
        let key_schema_str = self.key_schema.as_deref().ok_or_else(|| {
            error!("An Avro schema is required for key and value");
            StreamRegistryError::MissingSchema("key")
        })?;
        let value_schema_str = self.value_schema.as_deref().ok_or_else(|| {
            error!("An Avro schema is required for key and value");
            StreamRegistryError::MissingSchema("value")
        })?;

        let key_schema = Schema::parse_str(key_schema_str)?;
        let value_schema = Schema::parse_str(value_schema_str)?;
        info!("Initialized Avro schema objects for a producer");

        let registration = client
            .register_producer(&self.registry_config, &self.stream_name)
            .await?;
        let binding = registration.primary()?;

        let properties =
            merge_properties(Some(&binding.stream_configuration), self.properties.as_ref());

        let producer = AvroProducer::from_properties(properties, key_schema, value_schema)?;
        let topic = primary_topic(binding)?;
        Ok((producer, topic))
    }
}

/// The single topic a producer binds to: the first one listed
fn primary_topic(binding: &RegionStreamConfig) -> StreamResult<String> {
    binding.topics.first().cloned().ok_or_else(|| {
        StreamRegistryError::MalformedResponse(
            "registration listed no topics for the stream".to_string(),
        )
    })
}
