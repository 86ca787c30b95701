#![allow(dead_code, clippy::unwrap_used)]
//! In-process mock of the Lokalise API.
//!
//! Serves `project/list`, `project/export`, `project/import` and an asset host
//! on a random local port. Each route answers with a canned status and body
//! and records what it received.

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Form, Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const LIST: &str = "project/list";
pub const EXPORT: &str = "project/export";
pub const IMPORT: &str = "project/import";

/// A request as seen by the mock.
#[derive(Debug, Clone, Default)]
pub struct Recorded {
    /// Text fields in arrival order.
    pub fields: Vec<(String, String)>,
    /// Names of every part in arrival order, file part included.
    pub part_order: Vec<String>,
    /// `(filename, bytes)` of the uploaded file part.
    pub file: Option<(String, Vec<u8>)>,
}

impl Recorded {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|(key, _)| key.as_str()).collect()
    }
}

#[derive(Default)]
struct Shared {
    responses: Mutex<HashMap<&'static str, (u16, String)>>,
    requests: Mutex<Vec<(&'static str, Recorded)>>,
    assets: Mutex<HashMap<String, Vec<u8>>>,
}

impl Shared {
    fn answer(&self, route: &'static str, recorded: Recorded) -> Response {
        self.requests.lock().unwrap().push((route, recorded));
        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .get(route)
            .cloned()
            .unwrap_or_else(|| (500, "no canned response".to_string()));
        (StatusCode::from_u16(status).unwrap(), body).into_response()
    }
}

pub struct MockServer {
    pub base_url: String,
    pub asset_url: String,
    shared: Arc<Shared>,
}

impl MockServer {
    /// Binds to `127.0.0.1:0` and serves in a background task.
    pub async fn start() -> Self {
        let shared = Arc::new(Shared::default());
        let app = Router::new()
            .route("/api/project/list", get(list))
            .route("/api/project/export", post(export))
            .route("/api/project/import", post(import))
            .route("/assets/{*path}", get(asset))
            .with_state(Arc::clone(&shared));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api/"),
            asset_url: format!("http://{addr}/assets/"),
            shared,
        }
    }

    pub fn client(&self) -> lokalise_cli::api::Client {
        lokalise_cli::api::Client::new()
            .unwrap()
            .with_base_url(self.base_url.clone())
            .with_asset_url(self.asset_url.clone())
    }

    /// Sets the canned answer for `route`.
    pub fn respond(&self, route: &'static str, status: u16, body: &str) {
        self.shared
            .responses
            .lock()
            .unwrap()
            .insert(route, (status, body.to_string()));
    }

    /// Makes `bytes` downloadable at `<asset_url><path>`.
    pub fn add_asset(&self, path: &str, bytes: &[u8]) {
        self.shared
            .assets
            .lock()
            .unwrap()
            .insert(path.to_string(), bytes.to_vec());
    }

    pub fn requests(&self, route: &str) -> Vec<Recorded> {
        self.shared
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| *r == route)
            .map(|(_, recorded)| recorded.clone())
            .collect()
    }

    /// Total API requests received, across routes.
    pub fn hits(&self) -> usize {
        self.shared.requests.lock().unwrap().len()
    }
}

async fn list(
    State(shared): State<Arc<Shared>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let part_order = params.iter().map(|(key, _)| key.clone()).collect();
    shared.answer(
        LIST,
        Recorded {
            fields: params,
            part_order,
            file: None,
        },
    )
}

async fn export(
    State(shared): State<Arc<Shared>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let part_order = fields.iter().map(|(key, _)| key.clone()).collect();
    shared.answer(
        EXPORT,
        Recorded {
            fields,
            part_order,
            file: None,
        },
    )
}

async fn import(State(shared): State<Arc<Shared>>, mut multipart: Multipart) -> Response {
    let mut recorded = Recorded::default();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        recorded.part_order.push(name.clone());
        if let Some(filename) = field.file_name().map(ToString::to_string) {
            let bytes: Bytes = field.bytes().await.unwrap();
            recorded.file = Some((filename, bytes.to_vec()));
        } else {
            let value = field.text().await.unwrap();
            recorded.fields.push((name, value));
        }
    }
    shared.answer(IMPORT, recorded)
}

async fn asset(State(shared): State<Arc<Shared>>, Path(path): Path<String>) -> Response {
    match shared.assets.lock().unwrap().get(&path) {
        Some(bytes) => (StatusCode::OK, bytes.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
