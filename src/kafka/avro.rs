//! Schema-aware consumer and producer wrappers
//!
//! rdkafka itself has no notion of a schema registry, so the schema-aware
//! variants wrap a plain client and retain the registry coordinates the
//! stream registry handed out: the `schema.registry.url` property and, for
//! the producer, the parsed key and value schemas messages are encoded with.

use apache_avro::{to_avro_datum, types::Value as AvroValue, Schema};
use log::debug;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::error::KafkaError;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{StreamRegistryError, StreamResult};
use crate::kafka::properties::{take_schema_registry_url, to_client_config};

const SEND_WAIT: u64 = 30;

/// A Kafka consumer for schema-encoded streams
///
/// Built from the merged property map with the schema registry URL kept
/// aside instead of dropped, so decoders layered on top know where the
/// schemas live.
pub struct AvroConsumer {
    inner: StreamConsumer,
    schema_registry_url: Option<String>,
}

impl AvroConsumer {
    /// Builds the consumer, splitting the schema registry URL out of the
    /// property map before the rest reaches librdkafka
    pub fn from_properties(mut properties: HashMap<String, String>) -> Result<Self, KafkaError> {
        let schema_registry_url = take_schema_registry_url(&mut properties);
        let inner: StreamConsumer = to_client_config(&properties).create()?;
        Ok(Self {
            inner,
            schema_registry_url,
        })
    }

    pub fn subscribe(&self, topics: &[&str]) -> Result<(), KafkaError> {
        self.inner.subscribe(topics)
    }

    /// Schema registry URL the stream registry resolved, if any
    pub fn schema_registry_url(&self) -> Option<&str> {
        self.schema_registry_url.as_deref()
    }

    /// The wrapped rdkafka consumer, for polling and offset management
    pub fn inner(&self) -> &StreamConsumer {
        &self.inner
    }

    pub fn into_inner(self) -> StreamConsumer {
        self.inner
    }
}

/// A Kafka producer bound to key and value Avro schemas
pub struct AvroProducer {
    inner: FutureProducer,
    key_schema: Schema,
    value_schema: Schema,
    schema_registry_url: Option<String>,
}

impl AvroProducer {
    pub fn from_properties(
        mut properties: HashMap<String, String>,
        key_schema: Schema,
        value_schema: Schema,
    ) -> Result<Self, KafkaError> {
        let schema_registry_url = take_schema_registry_url(&mut properties);
        let inner: FutureProducer = to_client_config(&properties).create()?;
        Ok(Self {
            inner,
            key_schema,
            value_schema,
            schema_registry_url,
        })
    }

    /// Encodes the key and value against the bound schemas and sends
    pub async fn send(
        &self,
        topic: &str,
        key: &AvroValue,
        value: &AvroValue,
    ) -> StreamResult<()> {
        let key_bytes = to_avro_datum(&self.key_schema, key.clone())?;
        let value_bytes = to_avro_datum(&self.value_schema, value.clone())?;

        let record = FutureRecord::to(topic).key(&key_bytes).payload(&value_bytes);
        self.inner
            .send(record, Timeout::After(Duration::from_secs(SEND_WAIT)))
            .await
            .map_err(|(e, _)| StreamRegistryError::Kafka(e))?;
        debug!("Avro message sent to topic '{}'", topic);
        Ok(())
    }

    pub fn key_schema(&self) -> &Schema {
        &self.key_schema
    }

    pub fn value_schema(&self) -> &Schema {
        &self.value_schema
    }

    pub fn schema_registry_url(&self) -> Option<&str> {
        self.schema_registry_url.as_deref()
    }

    /// The wrapped rdkafka producer, for flushing and raw sends
    pub fn inner(&self) -> &FutureProducer {
        &self.inner
    }
}
