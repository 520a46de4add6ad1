//! Registry-driven Kafka consumer construction
//!
//! The builder registers the application with the stream registry, resolves
//! broker properties and topics for the stream, and hands back a consumer
//! that is (by default) already subscribed to every topic backing the
//! stream.

use log::info;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::error::KafkaError;
use std::collections::HashMap;

use crate::error::StreamResult;
use crate::kafka::avro::AvroConsumer;
use crate::kafka::properties::{merge_properties, take_schema_registry_url, to_client_config};
use crate::registry::{RegistryClient, RegistryConfig};

const GROUP_ID: &str = "group.id";

/// The consumer a [`ConsumerBuilder`] produced
///
/// Plain consumers are bare rdkafka [`StreamConsumer`]s; the schema-aware
/// variant additionally carries the resolved schema registry URL.
pub enum RegisteredConsumer {
    Plain(StreamConsumer),
    Avro(AvroConsumer),
}

impl RegisteredConsumer {
    pub fn subscribe(&self, topics: &[&str]) -> Result<(), KafkaError> {
        match self {
            RegisteredConsumer::Plain(consumer) => consumer.subscribe(topics),
            RegisteredConsumer::Avro(consumer) => consumer.subscribe(topics),
        }
    }

    /// The underlying rdkafka consumer, regardless of variant
    pub fn raw(&self) -> &StreamConsumer {
        match self {
            RegisteredConsumer::Plain(consumer) => consumer,
            RegisteredConsumer::Avro(consumer) => consumer.inner(),
        }
    }

    pub fn as_avro(&self) -> Option<&AvroConsumer> {
        match self {
            RegisteredConsumer::Avro(consumer) => Some(consumer),
            RegisteredConsumer::Plain(_) => None,
        }
    }
}

/// Builder for a stream-registry backed Kafka consumer
///
/// Defaults match the upstream clients: schema-aware, auto-subscribed.
pub struct ConsumerBuilder {
    registry_config: RegistryConfig,
    stream_name: String,
    properties: Option<HashMap<String, String>>,
    avro: bool,
    auto_subscribe: bool,
}

impl ConsumerBuilder {
    pub fn new(registry_config: RegistryConfig, stream_name: impl Into<String>) -> Self {
        Self {
            registry_config,
            stream_name: stream_name.into(),
            properties: None,
            avro: true,
            auto_subscribe: true,
        }
    }

    /// Kafka consumer properties merged with the registry's defaults
    ///
    /// Note the registry's value wins when both sides set the same key.
    pub fn properties(mut self, properties: HashMap<String, String>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Whether to build a schema-aware consumer (default true)
    pub fn avro(mut self, avro: bool) -> Self {
        self.avro = avro;
        self
    }

    /// Whether to subscribe to the stream's topics before returning
    /// (default true)
    pub fn auto_subscribe(mut self, auto_subscribe: bool) -> Self {
        self.auto_subscribe = auto_subscribe;
        self
    }

    /// Registers the consumer and builds it from the resolved properties
    ///
    /// Returns the consumer together with the full list of topics backing
    /// the stream. If `auto_subscribe` is on, the consumer is already
    /// subscribed to all of them.
    pub async fn create(
        self,
        client: &RegistryClient,
    ) -> StreamResult<(RegisteredConsumer, Vec<String>)> {
        let registration = client
            .register_consumer(&self.registry_config, &self.stream_name)
            .await?;
        let binding = registration.primary()?;

        let properties = resolve_properties(
            &binding.stream_configuration,
            self.properties.as_ref(),
            &self.registry_config.app_name,
        );

        let consumer = if self.avro {
            RegisteredConsumer::Avro(AvroConsumer::from_properties(properties)?)
        } else {
            let mut properties = properties;
            take_schema_registry_url(&mut properties);
            RegisteredConsumer::Plain(to_client_config(&properties).create()?)
        };

        let topics = binding.topics.clone();
        if self.auto_subscribe {
            let topic_refs: Vec<&str> = topics.iter().map(String::as_str).collect();
            consumer.subscribe(&topic_refs)?;
        }
        Ok((consumer, topics))
    }
}

/// Merges registry and user properties and defaults the consumer group
fn resolve_properties(
    registry_props: &HashMap<String, String>,
    user_props: Option<&HashMap<String, String>>,
    app_name: &str,
) -> HashMap<String, String> {
    let mut properties = merge_properties(Some(registry_props), user_props);
    if !properties.contains_key(GROUP_ID) {
        info!(
            "No consumer group id was specified, defaulting to the application name: {}",
            app_name
        );
        properties.insert(GROUP_ID.to_string(), app_name.to_string());
    }
    properties
}
