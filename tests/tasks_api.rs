//! Integration tests for the taskd REST API.
//! Binds the real router on a random port and drives it over HTTP.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};
use taskd::{config::ServiceConfig, rest, store::Task, AppContext};

/// Start a server on a random port and return its base URL plus the context
/// (for asserting on store state directly).
async fn start_server() -> (String, Arc<AppContext>) {
    let config = Arc::new(ServiceConfig::new(None, None, None, None, None));
    let ctx = Arc::new(AppContext::new(config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let router = rest::build_router(ctx.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    (format!("http://{addr}"), ctx)
}

fn task(id: &str, description: &str) -> Value {
    json!({
        "id": id,
        "description": description,
        "note": "заметка",
        "applications": ["Terminal", "git"],
    })
}

#[tokio::test]
async fn startup_seeds_exactly_two_tasks() {
    let (base, _ctx) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/tasks")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let body = resp.text().await.unwrap();
    // Pretty-printed with 2-space indent.
    assert!(body.contains("\n  \""), "expected indented output: {body}");

    let tasks: HashMap<String, Task> = serde_json::from_str(&body).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(
        tasks["1"].description,
        "Сделать финальное задание темы REST API"
    );
    assert_eq!(tasks["1"].applications, vec!["VS Code", "Terminal", "git"]);
    assert_eq!(tasks["2"].applications.last().unwrap(), "Postman");
}

#[tokio::test]
async fn post_then_get_round_trips() {
    let (base, _ctx) = start_server().await;
    let client = reqwest::Client::new();

    let posted = task("99", "новая задача");
    let resp = client
        .post(format!("{base}/tasks"))
        .json(&posted)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    assert!(resp.text().await.unwrap().is_empty());

    let resp = client.get(format!("{base}/tasks/99")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let got: Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(got, posted);
}

#[tokio::test]
async fn posting_same_id_twice_keeps_only_the_latest() {
    let (base, ctx) = start_server().await;
    let client = reqwest::Client::new();

    for description in ["первая версия", "вторая версия"] {
        let resp = client
            .post(format!("{base}/tasks"))
            .json(&task("7", description))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let got: Value = client
        .get(format!("{base}/tasks/7"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(got["description"], "вторая версия");
    assert_eq!(ctx.store.len().await, 3); // two seeds + one "7"
}

#[tokio::test]
async fn unknown_id_returns_400_with_the_id_in_the_body() {
    let (base, _ctx) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/tasks/does-not-exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body = resp.text().await.unwrap();
    assert!(body.contains("does-not-exist"), "body: {body}");
    assert!(body.contains("не найдена"), "body: {body}");

    let resp = client
        .delete(format!("{base}/tasks/does-not-exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body = resp.text().await.unwrap();
    assert!(body.contains("does-not-exist"), "body: {body}");
}

#[tokio::test]
async fn delete_removes_the_task_everywhere() {
    let (base, _ctx) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.delete(format!("{base}/tasks/1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.unwrap().is_empty());

    let resp = client.get(format!("{base}/tasks/1")).send().await.unwrap();
    assert_eq!(resp.status(), 400);

    let tasks: HashMap<String, Task> = client
        .get(format!("{base}/tasks"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!tasks.contains_key("1"));
    assert!(tasks.contains_key("2"));
}

#[tokio::test]
async fn malformed_body_is_rejected_and_store_is_untouched() {
    let (base, ctx) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/tasks"))
        .body("это не JSON {{{")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(ctx.store.len().await, 2);

    // Wrong shape (array instead of object) is rejected too.
    let resp = client
        .post(format!("{base}/tasks"))
        .body("[1, 2, 3]")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(ctx.store.len().await, 2);
}

#[tokio::test]
async fn missing_fields_default_silently_on_create() {
    let (base, _ctx) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/tasks"))
        .body(r#"{"id":"bare"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let got: Value = client
        .get(format!("{base}/tasks/bare"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(got["description"], "");
    assert_eq!(got["applications"], json!([]));
}

#[tokio::test]
async fn empty_id_is_accepted_as_a_key() {
    let (base, ctx) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/tasks"))
        .body(r#"{"id":"","description":"безымянная","note":"","applications":[]}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    assert_eq!(ctx.store.get("").await.unwrap().description, "безымянная");
}

#[tokio::test]
async fn health_reports_ok() {
    let (base, _ctx) = start_server().await;

    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
