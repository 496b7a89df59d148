use super::serialization::SerializationError;
use rdkafka::error::KafkaError;

/// Unified error type for broker producer and consumer operations.
#[derive(Debug)]
pub enum KafkaClientError {
    /// Failure reported by the broker client
    Kafka(KafkaError),
    /// Payload could not be encoded or decoded
    Serialization(SerializationError),
}

impl std::fmt::Display for KafkaClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KafkaClientError::Kafka(e) => write!(f, "Kafka error: {}", e),
            KafkaClientError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for KafkaClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KafkaClientError::Kafka(e) => Some(e),
            KafkaClientError::Serialization(e) => Some(e),
        }
    }
}

impl From<KafkaError> for KafkaClientError {
    fn from(err: KafkaError) -> Self {
        KafkaClientError::Kafka(err)
    }
}

impl From<SerializationError> for KafkaClientError {
    fn from(err: SerializationError) -> Self {
        KafkaClientError::Serialization(err)
    }
}
