//! Integration tests for user management endpoints

mod common;

use axum::http::StatusCode;
use common::{error_code, TestApp, TEST_PASSWORD};
use inventory_shared::Role;
use serde_json::json;

fn new_user(email: &str, role: &str) -> serde_json::Value {
    json!({ "email": email, "password": "Password123", "role": role })
}

#[tokio::test]
async fn test_superadmin_user_lifecycle() {
    let app = TestApp::new();
    let root = app.token_for(Role::Superadmin).await;

    let (status, created) = app
        .post("/api/v1/users", Some(&root), &new_user("bea@example.com", "Regular"))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["email"], "bea@example.com");
    assert_eq!(created["role"], "Regular");
    assert!(created.get("password_hash").is_none());
    let path = format!("/api/v1/users/{}", created["id"]);

    let (status, fetched) = app.get(&path, Some(&root)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, promoted) = app
        .patch(&path, Some(&root), &json!({ "role": "Admin" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(promoted["role"], "Admin");

    let (status, deleted) = app.delete(&path, Some(&root)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["email"], "bea@example.com");

    let (status, _) = app.get(&path, Some(&root)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_created_user_can_log_in() {
    let app = TestApp::new();
    let root = app.token_for(Role::Superadmin).await;

    app.post("/api/v1/users", Some(&root), &new_user("cai@example.com", "Admin"))
        .await;

    let (status, login) = app.login("cai@example.com", "Password123").await;
    assert_eq!(status, StatusCode::OK);
    let token = login["access_token"].as_str().unwrap();

    let (status, me) = app.get("/api/v1/auth/me", Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["role"], "Admin");
}

#[tokio::test]
async fn test_password_change_takes_effect() {
    let app = TestApp::new();
    let root = app.token_for(Role::Superadmin).await;
    let user = app.seed_user("dan@example.com", Role::Regular).await;
    let path = format!("/api/v1/users/{}", user.id);

    let (status, _) = app
        .patch(&path, Some(&root), &json!({ "password": "NewPassword456" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.login("dan@example.com", TEST_PASSWORD).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.login("dan@example.com", "NewPassword456").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_listing_users_never_exposes_password_digest() {
    let app = TestApp::new();
    let admin = app.token_for(Role::Admin).await;
    app.seed_user("eve@example.com", Role::Regular).await;

    let (status, body) = app.get("/api/v1/users", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);

    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        let fields: Vec<_> = user.as_object().unwrap().keys().cloned().collect();
        assert_eq!(fields.len(), 3, "unexpected fields: {:?}", fields);
        assert!(user.get("password_hash").is_none());
        assert!(user.get("password").is_none());
    }
    assert!(!body.to_string().contains("$2b$"));
}

#[tokio::test]
async fn test_duplicate_email_is_409_without_mutation() {
    let app = TestApp::new();
    let root = app.token_for(Role::Superadmin).await;
    let first = app.seed_user("fay@example.com", Role::Regular).await;
    let second = app.seed_user("gus@example.com", Role::Regular).await;

    let (status, body) = app
        .post("/api/v1/users", Some(&root), &new_user("fay@example.com", "Admin"))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_code(&body), "CONFLICT");

    let path = format!("/api/v1/users/{}", second.id);
    let (status, _) = app
        .patch(&path, Some(&root), &json!({ "email": "fay@example.com" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, after) = app.get(&path, Some(&root)).await;
    assert_eq!(after["email"], "gus@example.com");

    let (_, original) = app
        .get(&format!("/api/v1/users/{}", first.id), Some(&root))
        .await;
    assert_eq!(original["role"], "Regular");

    let (_, list) = app.get("/api/v1/users", Some(&root)).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_keeping_own_email_is_not_a_conflict() {
    let app = TestApp::new();
    let root = app.token_for(Role::Superadmin).await;
    let user = app.seed_user("hal@example.com", Role::Regular).await;

    let (status, _) = app
        .patch(
            &format!("/api/v1/users/{}", user.id),
            Some(&root),
            &json!({ "email": "hal@example.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_user_bodies_are_rejected() {
    let app = TestApp::new();
    let root = app.token_for(Role::Superadmin).await;

    let (status, body) = app
        .post("/api/v1/users", Some(&root), &new_user("not-an-email", "Regular"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "email");

    let (status, body) = app
        .post(
            "/api/v1/users",
            Some(&root),
            &json!({ "email": "ivy@example.com", "password": "short", "role": "Regular" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "password");

    let (status, _) = app
        .post("/api/v1/users", Some(&root), &new_user("ivy@example.com", "Owner"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = app.get("/api/v1/users", Some(&root)).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_role_restrictions_on_user_routes() {
    let app = TestApp::new();
    let admin = app.token_for(Role::Admin).await;
    let regular = app.token_for(Role::Regular).await;
    let target = app.seed_user("jay@example.com", Role::Regular).await;
    let path = format!("/api/v1/users/{}", target.id);

    let (status, _) = app.get(&path, Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post("/api/v1/users", Some(&admin), &new_user("kim@example.com", "Regular"))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .patch(&path, Some(&admin), &json!({ "role": "Superadmin" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.delete(&path, Some(&admin)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.get("/api/v1/users", Some(&regular)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.get(&path, Some(&regular)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, after) = app.get(&path, Some(&admin)).await;
    assert_eq!(after["role"], "Regular");
}

#[tokio::test]
async fn test_missing_user_is_404() {
    let app = TestApp::new();
    let root = app.token_for(Role::Superadmin).await;

    let (status, _) = app.get("/api/v1/users/999", Some(&root)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .patch("/api/v1/users/999", Some(&root), &json!({ "role": "Admin" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/api/v1/users/999", Some(&root)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[cfg_attr(not(feature = "integration"), ignore = "requires database")]
async fn test_duplicate_email_against_postgres() {
    let app = TestApp::postgres().await;
    app.cleanup().await;
    let root = app.token_for(Role::Superadmin).await;

    let (status, _) = app
        .post("/api/v1/users", Some(&root), &new_user("pg@example.com", "Regular"))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app
        .post("/api/v1/users", Some(&root), &new_user("pg@example.com", "Regular"))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    app.cleanup().await;
}
