use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use server::startup::serve;
use server::state::ServerState;
use service::memory::InMemoryStore;
use service::Repositories;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestApp {
    base_url: String,
    store: Arc<InMemoryStore>,
    stop: Option<oneshot::Sender<()>>,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let store = Arc::new(InMemoryStore::new());
    let state = ServerState::new(Repositories::in_memory(store.clone()));

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let shutdown = async move {
            let _ = rx.await;
        };
        if let Err(e) = serve(listener, state, shutdown).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url, store, stop: Some(tx) })
}

#[tokio::test]
async fn customer_lifecycle_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();
    let sms = app.store.add_channel_type("sms").await;

    let resp = client
        .post(format!("{}/customers", app.base_url))
        .json(&json!({ "name": "Grace" }))
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::CREATED);
    let created: Value = resp.json().await?;
    let id = created["id"].as_str().unwrap_or_default().to_string();

    let resp = client
        .post(format!("{}/customers/{}/notification-channels/{}", app.base_url, id, sms.id))
        .json(&json!({ "lookup_key": "+4400", "contact_customer": true }))
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);

    let prefs: Value = client
        .get(format!("{}/customers/{}/notification-channels", app.base_url, id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(prefs.as_array().map(|a| a.len()), Some(1));
    assert_eq!(prefs[0]["lookup_key"], "+4400");

    let resp = client.delete(format!("{}/customers/{}", app.base_url, id)).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);
    assert!(app.store.all_preferences().await.is_empty());

    let resp = client.get(format!("{}/customers/{}", app.base_url, id)).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn body_without_content_type_is_accepted() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/notifications", app.base_url))
        .body(r#"{"from":"ops","text":"deploy finished"}"#)
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::CREATED);
    let body: Value = resp.json().await?;
    assert_eq!(body["from"], "ops");
    Ok(())
}
