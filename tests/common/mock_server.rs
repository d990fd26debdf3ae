//! Canned-response HTTP server for exercising the real transport.
//!
//! An axum router with a single fallback handler records every request and
//! answers from a table keyed by method and path. The server runs on its own
//! thread with a current-thread runtime, so it serves both `#[test]` and
//! `#[tokio::test]` callers.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
}

#[derive(Default)]
struct Routes {
    responses: HashMap<(String, String), Canned>,
    requests: Vec<RecordedRequest>,
}

type SharedRoutes = Arc<Mutex<Routes>>;

pub struct MockServer {
    addr: SocketAddr,
    routes: SharedRoutes,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

async fn canned_response(
    State(routes): State<SharedRoutes>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let method = method.to_string();
    let path = uri.path().to_string();

    let canned = {
        let mut routes = routes.lock().unwrap();
        routes.requests.push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            body: String::from_utf8_lossy(&body).to_string(),
        });
        routes.responses.get(&(method, path)).cloned()
    };

    let canned = canned.unwrap_or(Canned {
        status: StatusCode::NOT_FOUND,
        body: r#"{"status":"fail","message":"Route not found"}"#.to_string(),
    });
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}

impl MockServer {
    pub fn start() -> Self {
        let routes: SharedRoutes = Arc::new(Mutex::new(Routes::default()));
        let (ready_tx, ready_rx) = std::sync::mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let app = Router::new()
            .fallback(canned_response)
            .with_state(Arc::clone(&routes));

        let handle = thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build mock server runtime");

            rt.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind mock server");
                ready_tx
                    .send(listener.local_addr().expect("mock server address"))
                    .expect("Failed to report mock server address");

                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("Mock server failed");
            });
        });

        let addr = ready_rx.recv().expect("Mock server failed to start");
        MockServer {
            addr,
            routes,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL ending in `/v2`, like the real service
    pub fn url(&self) -> String {
        format!("http://{}/v2", self.addr)
    }

    /// Answer `method path` (path relative to `/v2`) with `status` and `body`
    pub fn respond(&self, method: &str, path: &str, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.routes.lock().unwrap().responses.insert(
            (method.to_string(), format!("/v2{path}")),
            Canned {
                status,
                body: body.to_string(),
            },
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.routes.lock().unwrap().requests.clone()
    }

    /// Requests as "METHOD /path" lines, in arrival order
    pub fn request_lines(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
