//! Integration tests against an in-process stub backend.

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;

use api::models::Role;
use api::{ApiClient, Error, TokenStore};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base: &str, dir: &tempfile::TempDir) -> ApiClient {
    ApiClient::new(base, TokenStore::open(dir.path().join("credentials.toml")))
}

/// Stub that rejects requests without a bearer header, like the real
/// backend's auth dependency.
fn guarded_cohorts() -> Router {
    Router::new().route(
        "/api/cohorts",
        get(|headers: HeaderMap| async move {
            match headers.get("authorization") {
                Some(_) => Json(json!([])).into_response(),
                None => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"detail": "Not authenticated"})),
                )
                    .into_response(),
            }
        }),
    )
}

#[tokio::test]
async fn test_bearer_header_sent_iff_token_present() {
    let base = spawn(guarded_cohorts()).await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&base, &dir);

    // No token: the stub sees no Authorization header and rejects.
    let err = client.cohorts().await.unwrap_err();
    match err {
        Error::Status { status, detail } => {
            assert_eq!(status, 401);
            assert_eq!(detail, "Not authenticated");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }

    client.set_token("tok-abc").unwrap();
    let cohorts = client.cohorts().await.unwrap();
    assert!(cohorts.is_empty());
}

#[tokio::test]
async fn test_structured_error_body_surfaces_detail() {
    let router = Router::new().route(
        "/api/auth/register",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Email already registered"})),
            )
        }),
    );
    let base = spawn(router).await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&base, &dir);

    let err = client
        .register(&api::models::NewUser {
            email: "team@test.com".to_string(),
            name: "Sarah".to_string(),
            role: Role::Team,
            password: "password123".to_string(),
            phone: None,
            location: None,
            college: None,
            department: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Email already registered");
    // Failed registration must not leave a token behind.
    assert_eq!(client.token(), None);
}

#[tokio::test]
async fn test_unparsable_error_body_becomes_generic_message() {
    let router = Router::new().route(
        "/api/events",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn(router).await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&base, &dir);

    let err = client.events().await.unwrap_err();
    match err {
        Error::Status { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "Request failed");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_stores_token_side_effect() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async {
            Json(json!({
                "access_token": "tok-login",
                "token_type": "bearer",
                "user": {
                    "id": uuid::Uuid::new_v4().to_string(),
                    "email": "team@test.com",
                    "name": "Sarah",
                    "role": "team"
                }
            }))
        }),
    );
    let base = spawn(router).await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&base, &dir);

    let session = client.login("team@test.com", "password123").await.unwrap();
    assert_eq!(session.user.role, Role::Team);
    assert_eq!(client.token(), Some("tok-login".to_string()));

    // The token survives into a fresh client reading the same file.
    let fresh = ApiClient::new(
        base.as_str(),
        TokenStore::open(dir.path().join("credentials.toml")),
    );
    assert_eq!(fresh.token(), Some("tok-login".to_string()));
}

#[tokio::test]
async fn test_delete_accepts_empty_204_body() {
    let router = Router::new().route(
        "/api/cohorts/:id",
        delete(|Path(_id): Path<String>| async { StatusCode::NO_CONTENT }),
    );
    let base = spawn(router).await;
    let dir = tempfile::tempdir().unwrap();
    let client = client(&base, &dir);

    client.delete_cohort("c1").await.unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Port 1 is never listening.
    let dir = tempfile::tempdir().unwrap();
    let client = client("http://127.0.0.1:1", &dir);

    let err = client.cohorts().await.unwrap_err();
    match err {
        Error::Transport(_) => {}
        other => panic!("Expected Transport error, got {other:?}"),
    }
}
