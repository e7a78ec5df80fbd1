use generator::{Generator, GeneratorConfig, TakeoffGenerator};
use serde_json::json;
use takeoff::GenerationParams;

use mock_server::spawn_mock_server;

#[tokio::test]
async fn run_reshapes_server_text_into_replies() {
    let (url, port, recorded, shutdown) = spawn_mock_server(200, json!({"text": "hello"})).await;
    let generator = TakeoffGenerator::new(
        GeneratorConfig::new().with_base_url(&url).with_port(port),
    )
    .unwrap();

    let reply = generator.run("This is a test prompt.", None).await.unwrap();
    assert_eq!(reply.replies, vec!["hello".to_string()]);
    assert!(reply.metadata.is_empty());

    let bodies = recorded.lock().unwrap();
    assert_eq!(
        *bodies,
        vec![json!({
            "text": "This is a test prompt.",
            "consumer_group": "primary"
        })]
    );
    let _ = shutdown.send(()).await;
}

#[tokio::test]
async fn defaults_and_call_params_reach_the_server_merged() {
    let (url, port, recorded, shutdown) = spawn_mock_server(200, json!({"text": "ok"})).await;
    let generator = TakeoffGenerator::new(
        GeneratorConfig::new()
            .with_base_url(&url)
            .with_port(port)
            .with_generation_params(GenerationParams::new().with_sampling_temperature(0.5)),
    )
    .unwrap();

    generator.run(
        "Who is Mario?",
        Some(GenerationParams::new().with_max_new_tokens(100)),
    )
    .await
    .unwrap();

    let bodies = recorded.lock().unwrap();
    assert_eq!(
        *bodies,
        vec![json!({
            "text": "Who is Mario?",
            "sampling_temperature": 0.5,
            "max_new_tokens": 100,
            "consumer_group": "primary"
        })]
    );
    let _ = shutdown.send(()).await;
}

#[tokio::test]
async fn configured_consumer_group_routes_every_request() {
    let (url, port, recorded, shutdown) = spawn_mock_server(200, json!({"text": "ok"})).await;
    let generator = TakeoffGenerator::new(
        GeneratorConfig::new()
            .with_base_url(&url)
            .with_port(port)
            .with_consumer_group("reader-2"),
    )
    .unwrap();

    generator.run("ping", None).await.unwrap();

    let bodies = recorded.lock().unwrap();
    assert_eq!(bodies[0]["consumer_group"], json!("reader-2"));
    let _ = shutdown.send(()).await;
}

#[tokio::test]
async fn server_without_text_field_fails_the_run() {
    let (url, port, _recorded, shutdown) =
        spawn_mock_server(200, json!({"metadata": {}})).await;
    let generator = TakeoffGenerator::new(
        GeneratorConfig::new().with_base_url(&url).with_port(port),
    )
    .unwrap();

    assert!(generator.run("ping", None).await.is_err());
    let _ = shutdown.send(()).await;
}
