//! End-to-end tests for the users client against an in-memory users API.
//!
//! The server below mirrors the contract the client consumes: JSON bodies,
//! `{message}` error objects, server-assigned ids.

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use std::{
    net::TcpListener as StdTcpListener,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};
use tokio::{net::TcpListener, sync::Mutex};
use userdesk::{ApiClient, ApiResult, ClientConfig, User, UserPayload};

#[derive(Clone, Default)]
struct Store {
    users: Arc<Mutex<Vec<User>>>,
    next_id: Arc<AtomicU64>,
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "User not found" })),
    )
        .into_response()
}

async fn list_users(State(store): State<Store>) -> Json<Vec<User>> {
    Json(store.users.lock().await.clone())
}

async fn create_user(State(store): State<Store>, Json(payload): Json<UserPayload>) -> Response {
    let mut users = store.users.lock().await;
    if users.iter().any(|user| user.email == payload.email) {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "Email already exists" })),
        )
            .into_response();
    }

    let user = User {
        id: (store.next_id.fetch_add(1, Ordering::SeqCst) + 1).to_string(),
        name: payload.name,
        email: payload.email,
    };
    users.push(user.clone());

    (StatusCode::CREATED, Json(user)).into_response()
}

async fn get_user(State(store): State<Store>, Path(id): Path<String>) -> Response {
    let users = store.users.lock().await;
    users
        .iter()
        .find(|user| user.id == id)
        .map_or_else(not_found, |user| Json(user.clone()).into_response())
}

async fn update_user(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Response {
    let mut users = store.users.lock().await;
    let Some(user) = users.iter_mut().find(|user| user.id == id) else {
        return not_found();
    };
    user.name = payload.name;
    user.email = payload.email;

    Json(user.clone()).into_response()
}

async fn delete_user(State(store): State<Store>, Path(id): Path<String>) -> Response {
    let mut users = store.users.lock().await;
    let before = users.len();
    users.retain(|user| user.id != id);

    if users.len() == before {
        not_found()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

fn can_bind_localhost() -> bool {
    StdTcpListener::bind("127.0.0.1:0").is_ok()
}

async fn spawn_server() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let app = Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/test", get(|| async { "ok" }))
        .with_state(Store::default());

    tokio::spawn(async move {
        let _ = axum::serve(listener, app.into_make_service()).await;
    });

    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn added_user_shows_up_in_list() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let client = ApiClient::new(&ClientConfig::new(&spawn_server().await?))?;

    assert_eq!(client.fetch_users().await, ApiResult::Success(Vec::new()));
    assert_eq!(client.add_user("Ann", "a@b.com").await, ApiResult::Success(()));

    let users = client.fetch_users().await.into_result().map_err(anyhow::Error::msg)?;
    assert!(
        users
            .iter()
            .any(|user| user.name == "Ann" && user.email == "a@b.com")
    );
    Ok(())
}

#[tokio::test]
async fn second_delete_is_a_failure() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let client = ApiClient::new(&ClientConfig::new(&spawn_server().await?))?;
    assert!(client.add_user("Ann", "a@b.com").await.is_success());

    let users = client.fetch_users().await.into_result().map_err(anyhow::Error::msg)?;
    let id = users
        .first()
        .map(|user| user.id.clone())
        .ok_or_else(|| anyhow::anyhow!("expected one user"))?;

    assert_eq!(client.delete_user(&id).await, ApiResult::Success(()));
    assert_eq!(
        client.delete_user(&id).await,
        ApiResult::Failure("User not found".to_string())
    );
    assert_eq!(client.fetch_users().await, ApiResult::Success(Vec::new()));
    Ok(())
}

#[tokio::test]
async fn update_then_get() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let client = ApiClient::new(&ClientConfig::new(&spawn_server().await?))?;
    assert!(client.add_user("Ann", "a@b.com").await.is_success());

    assert_eq!(
        client.update_user("1", "Ann Lee", "ann@lee.dev").await,
        ApiResult::Success(())
    );
    assert_eq!(
        client.get_user_by_id("1").await,
        ApiResult::Success(Some(User {
            id: "1".to_string(),
            name: "Ann Lee".to_string(),
            email: "ann@lee.dev".to_string(),
        }))
    );
    assert_eq!(
        client.get_user_by_id("99").await,
        ApiResult::Failure("User not found.".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn server_validation_message_is_verbatim() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let client = ApiClient::new(&ClientConfig::new(&spawn_server().await?))?;

    assert!(client.add_user("Ann", "a@b.com").await.is_success());
    assert_eq!(
        client.add_user("Another Ann", "a@b.com").await,
        ApiResult::Failure("Email already exists".to_string())
    );
    assert_eq!(
        client.update_user("42", "Bob", "bob@b.com").await,
        ApiResult::Failure("User not found".to_string())
    );
    Ok(())
}
