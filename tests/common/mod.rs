#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const STUB_ERROR_BODY: &str = "no_service";

/// Stands in for Slack, records every message and answers with `status`.
#[derive(Clone)]
pub struct StubSlack {
    received: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
    status: StatusCode,
}

impl StubSlack {
    pub fn answering(status: StatusCode) -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            status,
        }
    }

    pub fn received(&self) -> Vec<(HeaderMap, Value)> {
        self.received.lock().unwrap().clone()
    }

    /// Serves the stub on an ephemeral port and returns its webhook URL.
    pub async fn serve(&self) -> String {
        let app = Router::new()
            .route("/hook", post(stub_slack_handler))
            .with_state(self.clone());
        format!("http://{}/hook", serve(app).await)
    }
}

async fn stub_slack_handler(
    State(stub): State<StubSlack>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, &'static str) {
    stub.received.lock().unwrap().push((headers, body));
    let body = if stub.status == StatusCode::OK {
        "ok"
    } else {
        STUB_ERROR_BODY
    };
    (stub.status, body)
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// URL on which nothing listens.
pub async fn unreachable_url() -> String {
    // grab a free port and release it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/hook")
}
