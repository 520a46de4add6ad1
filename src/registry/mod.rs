mod client;
mod config;
mod types;

pub use client::RegistryClient;
pub use config::RegistryConfig;
pub use types::{RegionStreamConfig, StreamRegistration};
