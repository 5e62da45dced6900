//! HTTP-level tests for the employee intake route, run against the full
//! middleware stack with in-memory storage.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::{Duration, Utc};
use http::{Method, Request, StatusCode, header};
use roster_server::db::{BoxError, EmployeeRepository, MemoryEmployeeRepository};
use roster_server::{AppState, api};
use serde_json::{Value, json};
use shared::models::{Employee, NewEmployee};
use tower::ServiceExt;

const ORIGIN: &str = "http://localhost:5173";

/// Storage that is always down
struct UnavailableRepository;

#[async_trait]
impl EmployeeRepository for UnavailableRepository {
    async fn insert(&self, _record: &NewEmployee) -> Result<Employee, BoxError> {
        Err("connection refused: postgres://10.0.0.7:5432".into())
    }
}

fn app_with(repo: Arc<dyn EmployeeRepository>) -> Router {
    api::build_app(AppState::new(repo, ORIGIN).unwrap())
}

fn valid_payload() -> Value {
    json!({
        "employeeId": "EMP-042",
        "name": "Katherine Johnson",
        "email": "katherine@example.com",
        "phone": "7575550100",
        "department": "Engineering",
        "dateOfJoining": "2021-08-16",
        "role": "Mathematician"
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, http::HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

fn post_employees(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn post_json(app: Router, payload: &Value) -> (StatusCode, Value) {
    let (status, _, body) = send(app, post_employees(payload.to_string())).await;
    (status, body)
}

#[tokio::test]
async fn valid_record_is_persisted_and_returned() {
    let repo = MemoryEmployeeRepository::new();
    let app = app_with(Arc::new(repo.clone()));

    let payload = valid_payload();
    let (status, body) = post_json(app, &payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Employee added successfully");

    let created = &body["newEmployee"];
    assert_eq!(created["id"], 1);
    for key in ["employeeId", "name", "email", "phone", "department", "dateOfJoining", "role"] {
        assert_eq!(created[key], payload[key], "field {key}");
    }

    let rows = repo.all().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email, "katherine@example.com");
    assert_eq!(rows[0].date_of_joining.to_string(), "2021-08-16");
}

#[tokio::test]
async fn invalid_email_is_rejected_with_field_error() {
    let repo = MemoryEmployeeRepository::new();
    let app = app_with(Arc::new(repo.clone()));

    let mut payload = valid_payload();
    payload["email"] = json!("not-an-email");
    let (status, body) = post_json(app, &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["path"], json!(["email"]));
    assert_eq!(errors[0]["message"], "Invalid email format");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn future_joining_date_is_rejected() {
    let app = app_with(Arc::new(MemoryEmployeeRepository::new()));

    let tomorrow = (Utc::now() + Duration::days(1)).date_naive();
    let mut payload = valid_payload();
    payload["dateOfJoining"] = json!(tomorrow.to_string());
    let (status, body) = post_json(app, &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["path"], json!(["dateOfJoining"]));
    assert_eq!(body["errors"][0]["message"], "Cannot be a future date");
}

#[tokio::test]
async fn every_violation_is_reported() {
    let app = app_with(Arc::new(MemoryEmployeeRepository::new()));

    let payload = json!({
        "employeeId": "ABCDEFGHIJK",
        "name": "",
        "email": "x",
        "phone": "12345",
        "department": "",
        "dateOfJoining": "someday",
        "role": ""
    });
    let (status, body) = post_json(app, &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let paths: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"][0].as_str().unwrap())
        .collect();
    assert_eq!(
        paths,
        ["employeeId", "name", "email", "phone", "department", "dateOfJoining", "role"]
    );
}

#[tokio::test]
async fn missing_fields_are_reported_as_required() {
    let app = app_with(Arc::new(MemoryEmployeeRepository::new()));

    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("role");
    let (status, body) = post_json(app, &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!([{ "path": ["role"], "message": "Required" }]));
}

#[tokio::test]
async fn missing_field_does_not_hide_other_violations() {
    let repo = MemoryEmployeeRepository::new();
    let app = app_with(Arc::new(repo.clone()));

    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("role");
    payload["email"] = json!("not-an-email");
    payload["phone"] = Value::Null;
    let (status, body) = post_json(app, &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([
            { "path": ["email"], "message": "Invalid email format" },
            { "path": ["phone"], "message": "Expected string, received null" },
            { "path": ["role"], "message": "Required" }
        ])
    );
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = app_with(Arc::new(MemoryEmployeeRepository::new()));

    let (status, _, body) = send(app, post_employees("{\"employeeId\": ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["path"], json!([]));
    assert_eq!(body["errors"][0]["message"], "Malformed JSON body");
}

#[tokio::test]
async fn storage_failure_is_opaque() {
    let app = app_with(Arc::new(UnavailableRepository));

    let (status, body) = post_json(app, &valid_payload()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn preflight_from_allowed_origin() {
    let app = app_with(Arc::new(MemoryEmployeeRepository::new()));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/employees")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(app, request).await;

    assert!(status.is_success());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    for method in ["GET", "POST", "PUT", "DELETE"] {
        assert!(methods.contains(method), "{methods}");
    }
    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("content-type"));
    assert!(allowed.contains("authorization"));
}

#[tokio::test]
async fn other_origins_are_not_allowed() {
    let app = app_with(Arc::new(MemoryEmployeeRepository::new()));

    let mut request = post_employees(valid_payload().to_string());
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://evil.example".parse().unwrap());
    let (_, headers, _) = send(app, request).await;

    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = app_with(Arc::new(MemoryEmployeeRepository::new()));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    let id = headers["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn invalid_origin_config_is_rejected() {
    let repo: Arc<dyn EmployeeRepository> = Arc::new(MemoryEmployeeRepository::new());
    assert!(AppState::new(repo, "http://bad\norigin").is_err());
}
