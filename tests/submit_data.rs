//! Router-level tests for the submission endpoint.
//!
//! Drive the real axum router against an in-memory store so the whole
//! request path (deserialization, handler, envelope) is exercised without
//! a live database.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use pereval_api::adapters::http::{submission_routes, SubmissionHandlers};
use pereval_api::application::handlers::submission::SubmitDataHandler;
use pereval_api::domain::foundation::{DomainError, ErrorCode};
use pereval_api::domain::submission::{Coords, PerevalSubmission, SubmittedBy, SubmittedImage};
use pereval_api::ports::SubmissionStore;

#[derive(Default)]
struct InMemoryStore {
    next_id: AtomicI64,
    user_count: AtomicUsize,
    coord_count: AtomicUsize,
    pereval_count: AtomicUsize,
    image_count: AtomicUsize,
    fail_pereval: bool,
}

impl InMemoryStore {
    fn failing_on_pereval() -> Self {
        Self {
            fail_pereval: true,
            ..Self::default()
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl SubmissionStore for InMemoryStore {
    async fn insert_user(&self, _user: &SubmittedBy) -> Result<i64, DomainError> {
        self.user_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.allocate_id())
    }

    async fn insert_coords(&self, _coords: &Coords) -> Result<i64, DomainError> {
        self.coord_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.allocate_id())
    }

    async fn insert_pereval(
        &self,
        _submission: &PerevalSubmission,
        _user_id: i64,
        _coord_id: i64,
    ) -> Result<i64, DomainError> {
        if self.fail_pereval {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "connection refused",
            ));
        }
        self.pereval_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.allocate_id())
    }

    async fn insert_image(
        &self,
        _pereval_id: i64,
        _image: &SubmittedImage,
    ) -> Result<i64, DomainError> {
        self.image_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.allocate_id())
    }
}

fn app(store: Arc<InMemoryStore>) -> Router {
    let handler = Arc::new(SubmitDataHandler::new(store));
    Router::new().nest("/api/v1", submission_routes(SubmissionHandlers::new(handler)))
}

fn payload(images: Value) -> Value {
    json!({
        "beauty_title": "Пер. ",
        "title": "Пхия",
        "other_titles": "Триев",
        "connect": "",
        "add_time": "2021-09-22T13:18:13",
        "user": {
            "email": "user@example.com",
            "fam": "Иванов",
            "name": "Иван",
            "otc": "Иванович",
            "phone": "+7 123 456 7890"
        },
        "coords": {"latitude": 45.3842, "longitude": 7.1525, "height": 1200},
        "level": {"winter": "", "summer": "1А", "autumn": "1А", "spring": ""},
        "images": images
    })
}

async fn submit(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/submitData")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

#[tokio::test]
async fn well_formed_submission_returns_created_envelope() {
    let store = Arc::new(InMemoryStore::default());
    let images = json!([
        {"data": "aGVsbG8=", "title": "Седловина"},
        {"data": "d29ybGQ=", "title": "Подъём"}
    ]);

    let (status, body) = submit(app(store.clone()), payload(images)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], 201);
    assert!(body["id"].is_i64());
    assert_eq!(store.user_count.load(Ordering::SeqCst), 1);
    assert_eq!(store.coord_count.load(Ordering::SeqCst), 1);
    assert_eq!(store.pereval_count.load(Ordering::SeqCst), 1);
    assert_eq!(store.image_count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn missing_coords_never_reaches_the_store() {
    let store = Arc::new(InMemoryStore::default());
    let mut body = payload(json!([]));
    body.as_object_mut().unwrap().remove("coords");

    let (status, _) = submit(app(store.clone()), body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.user_count.load(Ordering::SeqCst), 0);
    assert_eq!(store.coord_count.load(Ordering::SeqCst), 0);
    assert_eq!(store.pereval_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn pereval_insert_failure_yields_error_envelope_and_no_images() {
    let store = Arc::new(InMemoryStore::failing_on_pereval());
    let images = json!([{"data": "aGVsbG8=", "title": "Седловина"}]);

    let (status, body) = submit(app(store.clone()), payload(images)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 500);
    assert!(body["id"].is_null());
    assert_eq!(body["message"], "connection refused");
    assert_eq!(store.image_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn zero_images_still_succeeds() {
    let store = Arc::new(InMemoryStore::default());

    let (status, body) = submit(app(store.clone()), payload(json!([]))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(store.image_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn sequential_submissions_get_distinct_increasing_ids() {
    let store = Arc::new(InMemoryStore::default());
    let app = app(store);

    let (_, first) = submit(app.clone(), payload(json!([]))).await;
    let (_, second) = submit(app, payload(json!([]))).await;

    let first_id = first["id"].as_i64().unwrap();
    let second_id = second["id"].as_i64().unwrap();
    assert!(second_id > first_id);
}
