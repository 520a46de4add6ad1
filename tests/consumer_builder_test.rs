use rdkafka::consumer::Consumer;
use std::collections::HashMap;
use stream_registry_client::{ConsumerBuilder, RegisteredConsumer, RegistryClient, RegistryConfig};

const REGISTRATION_BODY: &str = r#"{
    "regionStreamConfigList": [
        {
            "streamConfiguration": {
                "bootstrap.servers": "x:9092",
                "schema.registry.url": "http://schemas:8081"
            },
            "topics": ["t1", "t2"]
        }
    ]
}"#;

async fn mock_registry(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock(
            "PUT",
            "/v0/streams/orders/consumers/orders-svc/regions/us-east-1",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(REGISTRATION_BODY)
        .create_async()
        .await
}

fn config(base_url: &str) -> RegistryConfig {
    RegistryConfig::new(base_url, "us-east-1", "orders-svc")
}

fn subscribed_topics(consumer: &RegisteredConsumer) -> Vec<String> {
    consumer
        .raw()
        .subscription()
        .unwrap()
        .elements()
        .iter()
        .map(|e| e.topic().to_string())
        .collect()
}

#[tokio::test]
async fn avro_consumer_is_subscribed_to_all_topics() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_registry(&mut server).await;

    let client = RegistryClient::new();
    let (consumer, topics) = ConsumerBuilder::new(config(&server.url()), "orders")
        .create(&client)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(topics, vec!["t1", "t2"]);

    let mut subscription = subscribed_topics(&consumer);
    subscription.sort();
    assert_eq!(subscription, vec!["t1", "t2"]);

    // schema-aware by default, with the registry URL retained
    let avro = consumer.as_avro().expect("expected an Avro consumer");
    assert_eq!(avro.schema_registry_url(), Some("http://schemas:8081"));
}

#[tokio::test]
async fn plain_consumer_drops_the_schema_registry_property() {
    let mut server = mockito::Server::new_async().await;
    mock_registry(&mut server).await;

    let client = RegistryClient::new();
    let (consumer, topics) = ConsumerBuilder::new(config(&server.url()), "orders")
        .avro(false)
        .create(&client)
        .await
        .unwrap();

    // librdkafka would have refused the client if schema.registry.url had
    // reached it, so a successful build is the observable contract here
    assert!(consumer.as_avro().is_none());
    assert_eq!(topics, vec!["t1", "t2"]);
}

#[tokio::test]
async fn manual_subscribe_leaves_the_consumer_unsubscribed() {
    let mut server = mockito::Server::new_async().await;
    mock_registry(&mut server).await;

    let client = RegistryClient::new();
    let (consumer, topics) = ConsumerBuilder::new(config(&server.url()), "orders")
        .auto_subscribe(false)
        .create(&client)
        .await
        .unwrap();

    assert!(subscribed_topics(&consumer).is_empty());

    // the caller can still subscribe with the returned topics
    let refs: Vec<&str> = topics.iter().map(String::as_str).collect();
    consumer.subscribe(&refs).unwrap();
    assert_eq!(subscribed_topics(&consumer).len(), 2);
}

#[tokio::test]
async fn caller_properties_are_merged_under_the_registry() {
    let mut server = mockito::Server::new_async().await;
    mock_registry(&mut server).await;

    let mut user = HashMap::new();
    user.insert("auto.offset.reset".to_string(), "latest".to_string());
    user.insert("group.id".to_string(), "custom-group".to_string());

    let client = RegistryClient::new();
    let result = ConsumerBuilder::new(config(&server.url()), "orders")
        .properties(user)
        .create(&client)
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn registration_failure_aborts_consumer_creation() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock(
            "PUT",
            "/v0/streams/orders/consumers/orders-svc/regions/us-east-1",
        )
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let client = RegistryClient::new();
    let result = ConsumerBuilder::new(config(&server.url()), "orders")
        .create(&client)
        .await;
    assert!(result.is_err());
}
