//! Generates demo traffic against a local Kafka broker.
//!
//! Publishes a fixed batch of numbered text messages to the `test` topic,
//! then reads the topic back from the beginning and prints every record as
//! `<offset>: <payload>`.

use benchbox::{KafkaClientError, KafkaConsumer, KafkaProducer, StringSerializer};
use log::info;
use std::time::Duration;

const BROKERS: &str = "localhost:9092";
const TOPIC: &str = "test";
const GROUP_ID: &str = "kafka-exercise";
const MESSAGE_COUNT: usize = 100;
const WATERMARK_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), KafkaClientError> {
    env_logger::init();

    let producer = KafkaProducer::new(BROKERS, TOPIC)?;
    produce(&producer, MESSAGE_COUNT).await?;

    consume_all().await
}

/// Publishes `count` numbered text messages, each acknowledged by the broker
/// before the next is sent.
async fn produce(producer: &KafkaProducer, count: usize) -> Result<(), KafkaClientError> {
    for i in 0..count {
        producer
            .send_with_serializer(&format!("test message {}", i), &StringSerializer)
            .await?;
    }
    producer.flush(Duration::from_secs(5))?;
    info!("published {} messages to '{}'", count, TOPIC);
    Ok(())
}

/// Reads every message that existed in the topic when the call started,
/// printing each as `<offset>: <payload>`. The stop marker is a snapshot
/// taken before reading; production racing with this call can make it read
/// more or fewer messages than exist when it returns.
async fn consume_all() -> Result<(), KafkaClientError> {
    let consumer: KafkaConsumer<String, StringSerializer> =
        KafkaConsumer::new(BROKERS, GROUP_ID, TOPIC, StringSerializer)?;

    let stop_offset = match consumer.last_offset(0, WATERMARK_TIMEOUT)? {
        Some(offset) => offset,
        None => {
            info!("topic '{}' is empty, nothing to consume", TOPIC);
            return Ok(());
        }
    };

    consumer
        .for_each_until(stop_offset, |message| {
            println!("{}: {}", message.offset(), message.value());
        })
        .await
}
