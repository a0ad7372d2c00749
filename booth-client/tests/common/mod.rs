// booth-client/tests/common/mod.rs
// In-process mock of the booking backend, with request counters so the
// zero-call and single-flight properties are observable.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use booth_client::{ApiClient, ClientConfig};
use chrono::Utc;
use serde_json::{Value, json};
use shared::models::{Booth, BoothPayload, BoothStatus, BookingRequest, BookingRequestCreate};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "secret";

#[derive(Default)]
pub struct BackendState {
    pub booths: Mutex<Vec<Booth>>,
    pub requests: Mutex<Vec<BookingRequest>>,

    /// When set, GET /booths fails with a 500 `{error}` body
    pub fail_public_list: AtomicBool,
    /// When set, GET /admin/booths fails with a 500 `{error}` body
    pub fail_admin_list: AtomicBool,
    /// Artificial latency for POST /booking-requests
    pub booking_delay_ms: AtomicU64,

    // Request counters, incremented before auth checks so every request
    // that reaches the backend is observable
    pub public_list_calls: AtomicUsize,
    pub booking_calls: AtomicUsize,
    pub admin_list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,
    pub request_list_calls: AtomicUsize,
}

impl BackendState {
    pub fn admin_calls(&self) -> usize {
        self.admin_list_calls.load(Ordering::SeqCst)
            + self.create_calls.load(Ordering::SeqCst)
            + self.update_calls.load(Ordering::SeqCst)
            + self.delete_calls.load(Ordering::SeqCst)
            + self.upload_calls.load(Ordering::SeqCst)
            + self.request_list_calls.load(Ordering::SeqCst)
    }
}

pub struct MockBackend {
    pub state: Arc<BackendState>,
    pub addr: SocketAddr,
}

impl MockBackend {
    pub async fn spawn() -> Self {
        Self::spawn_with(Vec::new()).await
    }

    pub async fn spawn_with(booths: Vec<Booth>) -> Self {
        let state = Arc::new(BackendState {
            booths: Mutex::new(booths),
            ..Default::default()
        });

        let app = Router::new()
            .route("/booths", get(list_booths))
            .route("/booking-requests", post(create_booking))
            .route("/admin/booths", get(admin_list).post(admin_create))
            .route(
                "/admin/booths/{id}",
                axum::routing::patch(admin_update).delete(admin_delete),
            )
            .route("/admin/upload-logo", post(admin_upload))
            .route("/admin/booking-requests", get(admin_requests))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { state, addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> ApiClient {
        ClientConfig::new(self.base_url()).build_client().unwrap()
    }

    pub async fn booth_numbers(&self) -> Vec<u32> {
        self.state.booths.lock().await.iter().map(|b| b.number).collect()
    }
}

/// Booth fixture with backend-style id
pub fn booth(id: &str, number: u32, status: BoothStatus) -> Booth {
    Booth {
        id: id.to_string(),
        number,
        category: Default::default(),
        status,
        company_name: None,
        company_website: None,
        company_short_text: None,
        contact_name: None,
        contact_phone: None,
        contact_email: None,
        company_logo_url: None,
        position: None,
    }
}

fn booth_from_payload(id: String, payload: BoothPayload) -> Booth {
    Booth {
        id,
        number: payload.number,
        category: payload.category,
        status: payload.status,
        company_name: payload.company_name,
        company_website: payload.company_website,
        company_short_text: payload.company_short_text,
        contact_name: payload.contact_name,
        contact_phone: payload.contact_phone,
        contact_email: payload.contact_email,
        company_logo_url: payload.company_logo_url,
        position: payload.position,
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!(
        "Basic {}",
        STANDARD.encode(format!("{ADMIN_USER}:{ADMIN_PASS}"))
    );
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str())
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    )
}

// ========== Public handlers ==========

async fn list_booths(State(state): State<Arc<BackendState>>) -> (StatusCode, Json<Value>) {
    state.public_list_calls.fetch_add(1, Ordering::SeqCst);

    if state.fail_public_list.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Booth service unavailable" })),
        );
    }

    let booths = state.booths.lock().await.clone();
    (StatusCode::OK, Json(json!(booths)))
}

async fn create_booking(
    State(state): State<Arc<BackendState>>,
    Json(payload): Json<BookingRequestCreate>,
) -> Json<Value> {
    state.booking_calls.fetch_add(1, Ordering::SeqCst);

    let delay = state.booking_delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    state.requests.lock().await.push(BookingRequest {
        id: uuid::Uuid::new_v4().to_string(),
        booth_number: payload.booth_number,
        booth_name: payload.booth_name,
        created_at: Utc::now(),
    });

    Json(json!({ "success": true, "redirectUrl": "/thanks" }))
}

// ========== Admin handlers ==========

async fn admin_list(
    headers: HeaderMap,
    State(state): State<Arc<BackendState>>,
) -> (StatusCode, Json<Value>) {
    state.admin_list_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }

    if state.fail_admin_list.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Booth service unavailable" })),
        );
    }

    let booths = state.booths.lock().await.clone();
    (StatusCode::OK, Json(json!(booths)))
}

async fn admin_create(
    headers: HeaderMap,
    State(state): State<Arc<BackendState>>,
    Json(payload): Json<BoothPayload>,
) -> (StatusCode, Json<Value>) {
    state.create_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }

    let mut booths = state.booths.lock().await;
    if booths.iter().any(|b| b.number == payload.number) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Booth number already exists" })),
        );
    }

    booths.push(booth_from_payload(uuid::Uuid::new_v4().to_string(), payload));
    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn admin_update(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<BackendState>>,
    Json(payload): Json<BoothPayload>,
) -> (StatusCode, Json<Value>) {
    state.update_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }

    let mut booths = state.booths.lock().await;
    match booths.iter_mut().find(|b| b.id == id) {
        Some(existing) => {
            *existing = booth_from_payload(id, payload);
            (StatusCode::OK, Json(json!({ "success": true })))
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Booth not found" })),
        ),
    }
}

async fn admin_delete(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<BackendState>>,
) -> (StatusCode, Json<Value>) {
    state.delete_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }

    let mut booths = state.booths.lock().await;
    let before = booths.len();
    booths.retain(|b| b.id != id);
    if booths.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Booth not found" })),
        );
    }

    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn admin_upload(
    headers: HeaderMap,
    State(state): State<Arc<BackendState>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    state.upload_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("logo") {
            let file_name = field.file_name().unwrap_or("logo").to_string();
            let bytes = field.bytes().await.unwrap_or_default();
            if bytes.is_empty() {
                break;
            }
            return (
                StatusCode::OK,
                Json(json!({ "success": true, "url": format!("/uploads/{file_name}") })),
            );
        }
    }

    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Missing logo file" })),
    )
}

async fn admin_requests(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<BackendState>>,
) -> (StatusCode, Json<Value>) {
    state.request_list_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }

    let filter: Option<u32> = params.get("boothNumber").and_then(|n| n.parse().ok());
    let requests: Vec<BookingRequest> = state
        .requests
        .lock()
        .await
        .iter()
        .filter(|r| filter.is_none_or(|n| r.booth_number == n))
        .cloned()
        .collect();

    (StatusCode::OK, Json(json!(requests)))
}
