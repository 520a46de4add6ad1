//! # stream-registry-client
//!
//! A thin client library that turns a stream registry registration into a
//! ready-to-use Kafka consumer or producer. The registry maps a
//! (stream, application, region) triple to concrete broker properties and
//! topic names; this crate performs the registration, merges the resolved
//! properties with caller overrides, and builds the matching `rdkafka`
//! client bound to the stream's topics.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stream_registry_client::{ConsumerBuilder, RegistryClient, RegistryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = RegistryClient::new();
//!     let config = RegistryConfig::new("http://streamregistry:8080", "us-east-1", "orders-svc");
//!
//!     // Schema-aware and auto-subscribed by default
//!     let (consumer, topics) = ConsumerBuilder::new(config, "orders")
//!         .create(&registry)
//!         .await?;
//!     println!("subscribed to {:?}", topics);
//!
//!     let _ = consumer;
//!     Ok(())
//! }
//! ```
//!
//! Each builder call performs exactly one registry round-trip; there is no
//! retry, no caching, and no state shared between calls. Diagnostics go
//! through the `log` facade, so install whatever logger the application
//! uses.

pub mod error;
pub mod kafka;
pub mod registry;

pub use error::{StreamRegistryError, StreamResult};
pub use kafka::{
    merge_properties, take_schema_registry_url, AvroConsumer, AvroProducer, ConsumerBuilder,
    ProducerBuilder, RegisteredConsumer, SCHEMA_REGISTRY_URL,
};
pub use registry::{RegionStreamConfig, RegistryClient, RegistryConfig, StreamRegistration};
