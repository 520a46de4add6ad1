use rdkafka::error::KafkaError;

/// Unified error type for registry and client-builder operations
///
/// The variants keep the distinction between caller programming errors
/// (`InvalidConfiguration`, `MissingSchema`) and remote or environmental
/// failures (`RegistrationFailed`, `MalformedResponse`, `Kafka`), so callers
/// can decide whether to fix their inputs or back off and report.
#[derive(Debug)]
pub enum StreamRegistryError {
    /// A required configuration field or the stream name was missing/empty
    InvalidConfiguration(String),
    /// The registry rejected the registration or was unreachable
    RegistrationFailed {
        status: Option<u16>,
        message: String,
    },
    /// The registry answered with a body this client cannot use
    MalformedResponse(String),
    /// The Avro producer needs both a key and a value schema
    MissingSchema(&'static str),
    /// A supplied schema string failed to parse, or a value did not fit
    /// the schema it was encoded against
    MalformedSchema(apache_avro::Error),
    /// Underlying Kafka client error
    Kafka(KafkaError),
}

impl std::fmt::Display for StreamRegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamRegistryError::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            StreamRegistryError::RegistrationFailed { status, message } => match status {
                Some(code) => write!(f, "Registration failed with status {}: {}", code, message),
                None => write!(f, "Registration failed: {}", message),
            },
            StreamRegistryError::MalformedResponse(msg) => {
                write!(f, "Malformed registry response: {}", msg)
            }
            StreamRegistryError::MissingSchema(which) => {
                write!(f, "An Avro schema is required for the {}", which)
            }
            StreamRegistryError::MalformedSchema(e) => write!(f, "Avro schema error: {}", e),
            StreamRegistryError::Kafka(e) => write!(f, "Kafka error: {}", e),
        }
    }
}

impl std::error::Error for StreamRegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamRegistryError::MalformedSchema(e) => Some(e),
            StreamRegistryError::Kafka(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KafkaError> for StreamRegistryError {
    fn from(err: KafkaError) -> Self {
        StreamRegistryError::Kafka(err)
    }
}

impl From<apache_avro::Error> for StreamRegistryError {
    fn from(err: apache_avro::Error) -> Self {
        StreamRegistryError::MalformedSchema(err)
    }
}

impl From<reqwest::Error> for StreamRegistryError {
    fn from(err: reqwest::Error) -> Self {
        StreamRegistryError::RegistrationFailed {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Result alias used across the crate
pub type StreamResult<T> = Result<T, StreamRegistryError>;
