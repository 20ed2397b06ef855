//! HTTP client tests against an in-process employee API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use employee_directory::domain::{Department, EmployeeRequest};
use employee_directory::errors::{AppError, MSG_CONNECTION, MSG_NOT_FOUND, MSG_SERVER_ERROR};
use employee_directory::infra::{EmployeeApi, HttpEmployeeClient};

type Store = Arc<Mutex<Vec<Value>>>;

fn seed() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Ada Lovelace",
            "email": "ada@x.com",
            "department": "IT",
            "createdAt": "2024-01-05T09:30:00",
            "updatedAt": "2024-01-06T10:00:00"
        }),
        json!({
            "id": 2,
            "name": "Grace Hopper",
            "email": "grace@x.com",
            "department": "OPERATIONS"
        }),
    ]
}

fn employee_routes(store: Store) -> Router {
    Router::new()
        .route("/api/employees", get(list).post(create))
        .route(
            "/api/employees/:id",
            get(fetch).put(update).delete(remove),
        )
        .route("/api/employees/searchByName/:name", get(search))
        .with_state(store)
}

async fn list(State(store): State<Store>) -> Json<Vec<Value>> {
    Json(store.lock().clone())
}

async fn create(State(store): State<Store>, Json(mut body): Json<Value>) -> Response {
    let mut employees = store.lock();
    body["id"] = json!(employees.len() + 1);
    body["createdAt"] = json!("2024-02-01T12:00:00Z");
    employees.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn fetch(State(store): State<Store>, Path(id): Path<i64>) -> Response {
    match store.lock().iter().find(|e| e["id"] == json!(id)) {
        Some(employee) => Json(employee.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": 404, "message": "Employee not found"})),
        )
            .into_response(),
    }
}

async fn update(
    State(store): State<Store>,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Response {
    if body["name"].as_str().map_or(true, |name| name.is_empty()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"field": "name", "message": "required"})),
        )
            .into_response();
    }

    let mut employees = store.lock();
    match employees.iter_mut().find(|e| e["id"] == json!(id)) {
        Some(employee) => {
            body["id"] = json!(id);
            *employee = body.clone();
            Json(body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn remove(State(store): State<Store>, Path(id): Path<i64>) -> StatusCode {
    let mut employees = store.lock();
    let before = employees.len();
    employees.retain(|e| e["id"] != json!(id));
    if employees.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn search(State(store): State<Store>, Path(name): Path<String>) -> Json<Vec<Value>> {
    let found = store
        .lock()
        .iter()
        .filter(|e| e["name"].as_str().map_or(false, |n| n.contains(&name)))
        .cloned()
        .collect();
    Json(found)
}

/// Serve `router` on an ephemeral port and return its base URL
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

async fn client() -> (HttpEmployeeClient, Store) {
    let store: Store = Arc::new(Mutex::new(seed()));
    let base_url = serve(employee_routes(store.clone())).await;
    (HttpEmployeeClient::new(&base_url).unwrap(), store)
}

#[tokio::test]
async fn test_list_decodes_wire_format() {
    let (client, _) = client().await;
    let employees = client.list().await.unwrap();

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].department, Department::It);
    assert!(employees[0].created_at.is_some());
    assert_eq!(employees[1].department, Department::Operations);
    assert!(employees[1].updated_at.is_none());
}

#[tokio::test]
async fn test_get_by_id() {
    let (client, _) = client().await;
    let employee = client.get(2).await.unwrap();
    assert_eq!(employee.name, "Grace Hopper");
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let (client, _) = client().await;
    let err = client.get(42).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.user_message(), MSG_NOT_FOUND);
}

#[tokio::test]
async fn test_create_posts_request_body() {
    let (client, store) = client().await;
    let created = client
        .create(EmployeeRequest::new("Alan Turing", "alan@x.com", Department::Finance))
        .await
        .unwrap();

    assert_eq!(created.id, 3);
    assert!(created.created_at.is_some());

    let stored = store.lock()[2].clone();
    assert_eq!(stored["name"], "Alan Turing");
    assert_eq!(stored["department"], "FINANCE");
}

#[tokio::test]
async fn test_update_puts_to_id() {
    let (client, store) = client().await;
    let updated = client
        .update(1, EmployeeRequest::new("Ada King", "ada@x.com", Department::Hr))
        .await
        .unwrap();

    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "Ada King");
    assert_eq!(store.lock()[0]["department"], "HR");
}

#[tokio::test]
async fn test_update_rejected_with_field_message() {
    let (client, _) = client().await;
    let err = client
        .update(1, EmployeeRequest::new("", "ada@x.com", Department::Hr))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_REQUEST));
    assert_eq!(err.user_message(), "required");
}

#[tokio::test]
async fn test_delete_removes_employee() {
    let (client, store) = client().await;
    client.delete(1).await.unwrap();
    assert_eq!(store.lock().len(), 1);

    let err = client.delete(1).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_search_by_name_encodes_segment() {
    let (client, _) = client().await;
    let found = client.search_by_name("Ada Lovelace".to_string()).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);

    let none = client.search_by_name("Nobody".to_string()).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_server_error_with_text_body() {
    let router = Router::new().route(
        "/api/employees",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database is down") }),
    );
    let client = HttpEmployeeClient::new(&serve(router).await).unwrap();

    let err = client.list().await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.user_message(), MSG_SERVER_ERROR);
}

#[tokio::test]
async fn test_undecodable_body_is_client_error() {
    let router = Router::new().route("/api/employees", get(|| async { "not json" }));
    let client = HttpEmployeeClient::new(&serve(router).await).unwrap();

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, AppError::Client(_)));
    assert!(err.user_message().starts_with("Error: "));
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpEmployeeClient::new(&format!("http://{}/api", addr)).unwrap();
    let err = client.list().await.unwrap_err();

    assert!(matches!(err, AppError::Connection(_)));
    assert_eq!(err.user_message(), MSG_CONNECTION);
}
