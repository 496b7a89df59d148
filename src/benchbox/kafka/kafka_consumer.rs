use super::kafka_error::KafkaClientError;
use super::serialization::Serializer;
use futures::StreamExt;
use log::{debug, info};
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::error::KafkaError;
use rdkafka::message::Message as KafkaMessage;
use std::marker::PhantomData;
use std::time::Duration;

/// A consumed record with its broker-assigned coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Message<V> {
    partition: i32,
    offset: i64,
    value: V,
}

impl<V> Message<V> {
    pub fn new(partition: i32, offset: i64, value: V) -> Self {
        Self {
            partition,
            offset,
            value,
        }
    }

    pub fn partition(&self) -> i32 {
        self.partition
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

/// A Kafka consumer scoped to one topic, reading from the earliest retained
/// offset and deserializing values through a [`Serializer`].
pub struct KafkaConsumer<V, S>
where
    S: Serializer<V>,
{
    consumer: StreamConsumer,
    topic: String,
    value_serializer: S,
    _phantom_value: PhantomData<V>,
}

impl<V, S> KafkaConsumer<V, S>
where
    S: Serializer<V>,
{
    /// Creates a consumer subscribed to `topic`. With no committed offsets
    /// for `group_id`, reading starts from the earliest retained message.
    pub fn new(
        brokers: &str,
        group_id: &str,
        topic: &str,
        value_serializer: S,
    ) -> Result<Self, KafkaError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("auto.offset.reset", "earliest")
            .create()?;
        consumer.subscribe(&[topic])?;

        info!(
            "created consumer for topic '{}' in group '{}' on {}",
            topic, group_id, brokers
        );

        Ok(Self {
            consumer,
            topic: topic.to_string(),
            value_serializer,
            _phantom_value: PhantomData,
        })
    }

    /// Offset of the last message in `partition` at call time, or `None`
    /// when the partition holds no messages.
    ///
    /// This is a snapshot: a concurrent producer can append past it before
    /// the next read.
    pub fn last_offset(&self, partition: i32, timeout: Duration) -> Result<Option<i64>, KafkaError> {
        let (low, high) = self.consumer.fetch_watermarks(&self.topic, partition, timeout)?;
        debug!(
            "watermarks for '{}' partition {}: {}..{}",
            self.topic, partition, low, high
        );
        Ok(if high > low { Some(high - 1) } else { None })
    }

    /// Reads messages in offset order from the earliest retained, handing
    /// each record with a non-empty payload to `handle`, until a message at
    /// or past `stop_offset` has been seen.
    ///
    /// Records with empty payloads advance the scan without being handed
    /// over. Blocks per message until the broker delivers one.
    pub async fn for_each_until<F>(&self, stop_offset: i64, mut handle: F) -> Result<(), KafkaClientError>
    where
        F: FnMut(Message<V>),
    {
        let mut stream = self.consumer.stream();

        while let Some(result) = stream.next().await {
            let msg = result.map_err(KafkaClientError::Kafka)?;
            let offset = msg.offset();

            if let Some(payload) = msg.payload() {
                let value = self.value_serializer.deserialize(payload)?;
                handle(Message::new(msg.partition(), offset, value));
            }

            if offset >= stop_offset {
                break;
            }
        }

        Ok(())
    }
}
