//! Shared programmable mock of the token service for integration tests.
//!
//! Each endpoint the client polls is driven by a script: a queue of
//! (status, body) replies consumed one per request. The last entry is
//! sticky, so a scripted terminal state keeps answering the same way,
//! like the real service does for a resolved job or an included
//! transaction.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use zktokens::poll::PollSettings;
use zktokens::{ClientConfig, Network, TokenClient};

/// One scripted reply.
#[derive(Debug, Clone)]
pub struct Scripted {
    pub status: u16,
    pub body: Value,
}

/// A 200 reply with the given body.
pub fn ok(body: Value) -> Scripted {
    Scripted { status: 200, body }
}

/// An injected transport-level failure.
pub fn fault(status: u16) -> Scripted {
    Scripted {
        status,
        body: json!({ "error": "injected failure" }),
    }
}

#[derive(Debug, Default)]
pub struct MockService {
    pub job_script: Mutex<VecDeque<Scripted>>,
    pub job_polls: AtomicU32,
    pub tx_script: Mutex<VecDeque<Scripted>>,
    pub tx_polls: AtomicU32,
    /// Bodies received on the prove endpoint, in order.
    pub prove_bodies: Mutex<Vec<Value>>,
    pub job_id: Mutex<String>,
}

impl MockService {
    pub fn new() -> Arc<Self> {
        let service = Self::default();
        *service.job_id.lock().unwrap() = "zkJob0001".to_string();
        Arc::new(service)
    }

    pub fn script_job(&self, replies: impl IntoIterator<Item = Scripted>) {
        *self.job_script.lock().unwrap() = replies.into_iter().collect();
    }

    pub fn script_tx(&self, replies: impl IntoIterator<Item = Scripted>) {
        *self.tx_script.lock().unwrap() = replies.into_iter().collect();
    }

    pub fn job_poll_count(&self) -> u32 {
        self.job_polls.load(Ordering::SeqCst)
    }

    pub fn tx_poll_count(&self) -> u32 {
        self.tx_polls.load(Ordering::SeqCst)
    }
}

/// Pop the next scripted reply; the final entry is sticky.
fn next(script: &Mutex<VecDeque<Scripted>>) -> Scripted {
    let mut queue = script.lock().unwrap();
    if queue.len() > 1 {
        queue.pop_front().unwrap()
    } else {
        queue.front().cloned().unwrap_or_else(|| fault(500))
    }
}

fn reply(scripted: Scripted) -> (StatusCode, Json<Value>) {
    (
        StatusCode::from_u16(scripted.status).unwrap(),
        Json(scripted.body),
    )
}

async fn job_result(
    State(service): State<Arc<MockService>>,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    service.job_polls.fetch_add(1, Ordering::SeqCst);
    reply(next(&service.job_script))
}

async fn tx_status(
    State(service): State<Arc<MockService>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    service.tx_polls.fetch_add(1, Ordering::SeqCst);
    let mut scripted = next(&service.tx_script);
    // Echo the queried hash unless the script pinned one explicitly.
    if let Value::Object(map) = &mut scripted.body {
        if !map.contains_key("hash") {
            map.insert("hash".into(), body["hash"].clone());
        }
    }
    reply(scripted)
}

async fn prove(
    State(service): State<Arc<MockService>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    service.prove_bodies.lock().unwrap().push(body);
    let job_id = service.job_id.lock().unwrap().clone();
    (StatusCode::OK, Json(json!({ "jobId": job_id })))
}

async fn deploy(Json(_body): Json<Value>) -> Json<Value> {
    Json(built_tx_json(1))
}

async fn transaction(Json(_body): Json<Value>) -> Json<Value> {
    Json(built_tx_json(2))
}

async fn airdrop(Json(body): Json<Value>) -> Json<Value> {
    let count = body["recipients"].as_array().map(Vec::len).unwrap_or(0);
    let txs: Vec<Value> = (0..count).map(|i| built_tx_json(10 + i as u64)).collect();
    Json(json!({ "txs": txs }))
}

async fn info(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "tokenAddress": body["tokenAddress"],
        "tokenId": "wZXmPf",
        "adminContractAddress": "B62qouKM",
        "adminAddress": "B62qmoZq",
        "adminTokenBalance": 0,
        "totalSupply": 1_000_000_000_000u64,
        "isPaused": false,
        "decimals": 9,
        "tokenSymbol": "TEST",
        "verificationKeyHash": "2337392",
        "uri": "https://example.com/token.json",
        "version": 1
    }))
}

async fn balance(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({ "balance": 940_000_000_000u64 }))
}

/// A plausible built transaction as the service would return it.
pub fn built_tx_json(nonce: u64) -> Value {
    json!({
        "serializedTransaction": "AQIDBAU=",
        "transaction": "{\"feePayer\":{}}",
        "tokenAddress": "B62qn25cKc4",
        "adminContractAddress": "B62qouKMtM",
        "payload": {
            "nonce": nonce,
            "transaction": "AQIDBAU=",
            "onlySign": true,
            "feePayer": { "fee": 100_000_000u64, "memo": "test" }
        }
    })
}

/// Start the mock service on an ephemeral port; returns its base URL.
pub async fn start_mock_service(service: Arc<MockService>) -> String {
    let app = Router::new()
        .route("/api/v1/result", post(job_result))
        .route("/api/v1/tx-status", post(tx_status))
        .route("/api/v1/prove", post(prove))
        .route("/api/v1/deploy", post(deploy))
        .route("/api/v1/transaction", post(transaction))
        .route("/api/v1/airdrop", post(airdrop))
        .route("/api/v1/info", post(info))
        .route("/api/v1/balance", post(balance))
        .with_state(service);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/v1")
}

/// A client aimed at the mock with zero-delay polling and the given error
/// budget.
pub fn test_client(base_url: &str, max_errors: u32) -> TokenClient {
    let mut config = ClientConfig::new("test-key", Network::Local);
    config.endpoint_override = Some(base_url.to_string());
    config.job_poll = PollSettings {
        interval_ms: 0,
        max_errors,
        deadline_secs: 60,
    };
    config.inclusion_poll = PollSettings {
        interval_ms: 0,
        max_errors,
        deadline_secs: 60,
    };
    TokenClient::new(config).unwrap()
}
