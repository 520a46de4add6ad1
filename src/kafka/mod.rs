mod avro;
mod consumer;
mod producer;
mod properties;

pub use avro::{AvroConsumer, AvroProducer};
pub use consumer::{ConsumerBuilder, RegisteredConsumer};
pub use producer::ProducerBuilder;
pub use properties::{merge_properties, take_schema_registry_url, SCHEMA_REGISTRY_URL};
