//! Thin wrappers around `rdkafka` for topic-scoped produce and consume.

mod kafka_consumer;
mod kafka_error;
mod kafka_producer;
mod serialization;

pub use kafka_consumer::{KafkaConsumer, Message};
pub use kafka_error::KafkaClientError;
pub use kafka_producer::KafkaProducer;
pub use serialization::{BytesSerializer, SerializationError, Serializer, StringSerializer};
