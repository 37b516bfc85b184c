//! Integration tests for the HTTP response contract.

use std::time::Duration;

use greeting_server::config::AppConfig;

mod common;

fn config_with_password(value: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.greeting.db_password = value.to_string();
    config
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_root_serves_greeting_with_configured_value() {
    let (addr, shutdown, _task) = common::spawn_server(config_with_password("hunter2")).await;

    let res = client()
        .get(format!("http://{addr}/"))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), 200);

    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("text/html"),
        "unexpected content type: {content_type}"
    );

    let body = res.text().await.unwrap();
    assert_eq!(
        body,
        "<h1>Welcome to My Node App on Kubernetes!</h1>\n<p>Secret DB_PASSWORD is: hunter2</p>"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_default_configuration_serves_not_set() {
    let (addr, shutdown, _task) = common::spawn_server(AppConfig::default()).await;

    let body = client()
        .get(format!("http://{addr}/"))
        .send()
        .await
        .expect("Server unreachable")
        .text()
        .await
        .unwrap();

    assert!(
        body.contains("<p>Secret DB_PASSWORD is: not-set</p>"),
        "default value missing from body: {body}"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_markup_in_value_is_reflected_unescaped() {
    let (addr, shutdown, _task) =
        common::spawn_server(config_with_password("<script>alert(1)</script>")).await;

    let body = client()
        .get(format!("http://{addr}/"))
        .send()
        .await
        .expect("Server unreachable")
        .text()
        .await
        .unwrap();

    assert!(
        body.contains("<p>Secret DB_PASSWORD is: <script>alert(1)</script></p>"),
        "value should be substituted verbatim: {body}"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (addr, shutdown, _task) = common::spawn_server(AppConfig::default()).await;

    let res = client()
        .get(format!("http://{addr}/nonexistent"))
        .send()
        .await
        .expect("Server unreachable");
    assert_eq!(res.status(), 404);

    let res = client()
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .expect("Server unreachable");
    assert_eq!(res.status(), 404, "no other route should exist");

    shutdown.trigger();
}

#[tokio::test]
async fn test_post_to_root_is_404() {
    let (addr, shutdown, _task) = common::spawn_server(AppConfig::default()).await;

    let res = client()
        .post(format!("http://{addr}/"))
        .body("ignored")
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let (addr, shutdown, _task) = common::spawn_server(config_with_password("p@ssw0rd")).await;
    let client = client();

    let mut bodies = Vec::new();
    for _ in 0..5 {
        let body = client
            .get(format!("http://{addr}/"))
            .send()
            .await
            .expect("Server unreachable")
            .bytes()
            .await
            .unwrap();
        bodies.push(body);
    }

    for body in &bodies[1..] {
        assert_eq!(*body, bodies[0], "responses should not vary across requests");
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_shutdown_trigger_stops_the_server() {
    let (addr, shutdown, task) = common::spawn_server(AppConfig::default()).await;

    let res = client()
        .get(format!("http://{addr}/"))
        .send()
        .await
        .expect("Server unreachable");
    assert_eq!(res.status(), 200);

    shutdown.trigger();

    let run_result = tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("server did not stop after shutdown trigger")
        .expect("serve task panicked");
    assert!(run_result.is_ok(), "server should stop cleanly: {run_result:?}");
}
