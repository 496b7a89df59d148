use super::kafka_error::KafkaClientError;
use super::serialization::Serializer;
use log::{debug, error, info};
use rdkafka::config::ClientConfig;
use rdkafka::error::KafkaError;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use std::time::Duration;

/// Successful-delivery payload: `(partition, offset)`. Older rdkafka
/// versions exposed this as `future_producer::Delivery`; 0.37 inlines it
/// as the `Ok` arm of `OwnedDeliveryResult`.
type Delivery = (i32, i64);

const SEND_WAIT_SECS: u64 = 30;

/// A wrapper around rdkafka's `FutureProducer` scoped to a single topic.
///
/// Every send awaits broker acknowledgment before returning, so messages
/// published through one producer reach the topic log in call order.
pub struct KafkaProducer {
    producer: FutureProducer,
    topic: String,
}

impl KafkaProducer {
    /// Creates a producer connected to `brokers` (comma-separated addresses,
    /// e.g. "localhost:9092") publishing to `topic`.
    pub fn new(brokers: &str, topic: &str) -> Result<Self, KafkaError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()?;

        info!("created producer for topic '{}' on {}", topic, brokers);

        Ok(Self {
            producer,
            topic: topic.to_string(),
        })
    }

    /// Publishes a keyless payload and waits for broker acknowledgment.
    pub async fn send(&self, payload: &[u8]) -> Result<Delivery, KafkaError> {
        let record = FutureRecord::<(), [u8]>::to(&self.topic).payload(payload);

        match self
            .producer
            .send(record, Timeout::After(Duration::from_secs(SEND_WAIT_SECS)))
            .await
        {
            Ok(delivery) => {
                debug!("message delivered to '{}'", self.topic);
                Ok(delivery)
            }
            Err((err, _)) => {
                error!("failed to deliver message to '{}': {}", self.topic, err);
                Err(err)
            }
        }
    }

    /// Serializes `value` and publishes it, waiting for acknowledgment.
    pub async fn send_with_serializer<T, S>(
        &self,
        value: &T,
        serializer: &S,
    ) -> Result<Delivery, KafkaClientError>
    where
        S: Serializer<T>,
    {
        let payload = serializer.serialize(value)?;
        Ok(self.send(&payload).await?)
    }

    /// Flushes any pending deliveries.
    pub fn flush(&self, timeout: Duration) -> Result<(), KafkaError> {
        self.producer.flush(Timeout::After(timeout))
    }
}
