//! Integration tests for owner-only staff management.

mod common;

use axum::http::{Method, StatusCode};
use common::{empty_request, get, json_request, TestContext, TEST_PASSWORD};
use serde_json::json;

#[tokio::test]
async fn test_staff_routes_require_owner() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let staff = ctx.staff().await;

    let (status, body) = ctx.send(get("/api/staff", Some(&staff))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied. Owner privileges required.");

    let (status, _) = ctx.send(get("/api/staff", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_staff_writes_forbidden_before_body_validation() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let staff = ctx.staff().await;
    let target = format!("/api/staff/{}", staff.account.id);

    let requests = [
        json_request(Method::POST, "/api/staff", Some(&staff), json!({ "email": "x" })),
        json_request(Method::PATCH, &target, Some(&staff), json!({ "role": "emperor", "isActive": "yes" })),
        json_request(
            Method::POST,
            &format!("{}/reset-password", target),
            Some(&staff),
            json!({ "newPassword": 7 }),
        ),
        empty_request(Method::DELETE, &target, Some(&staff)),
    ];

    for request in requests {
        let (status, body) = ctx.send(request).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Access denied. Owner privileges required.");
    }
}

#[tokio::test]
async fn test_create_staff_and_login() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let owner = ctx.owner().await;
    let email = common::unique_test_email();

    let (status, body) = ctx
        .send(json_request(
            Method::POST,
            "/api/staff",
            Some(&owner),
            json!({ "email": email.to_uppercase(), "password": "NewStaff#2024", "name": "Priya Sharma" }),
        ))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["email"], email);
    assert_eq!(body["data"]["role"], "admin");
    assert_eq!(body["data"]["isActive"], true);
    assert!(body["data"].get("passwordHash").is_none());

    let (status, _) = ctx
        .send(json_request(
            Method::POST,
            "/api/admin/login",
            None,
            json!({ "email": email, "password": "NewStaff#2024" }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_staff_duplicate_email() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let owner = ctx.owner().await;
    let existing = ctx.staff().await;

    let (status, body) = ctx
        .send(json_request(
            Method::POST,
            "/api/staff",
            Some(&owner),
            json!({ "email": existing.account.email, "password": TEST_PASSWORD, "name": "Duplicate" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists.");
}

#[tokio::test]
async fn test_create_staff_short_password() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let owner = ctx.owner().await;

    let (status, body) = ctx
        .send(json_request(
            Method::POST,
            "/api/staff",
            Some(&owner),
            json!({ "email": common::unique_test_email(), "password": "short", "name": "Too Short" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Password must be at least 8 characters");
}

#[tokio::test]
async fn test_owner_cannot_act_on_self() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let owner = ctx.owner().await;
    let own_uri = format!("/api/staff/{}", owner.account.id);

    let (status, body) = ctx
        .send(json_request(Method::PATCH, &own_uri, Some(&owner), json!({ "isActive": false })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Cannot modify your own account.");

    let (status, body) = ctx.send(empty_request(Method::DELETE, &own_uri, Some(&owner))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Cannot delete your own account.");

    let (status, _) = ctx
        .send(json_request(
            Method::POST,
            &format!("{}/reset-password", own_uri),
            Some(&owner),
            json!({ "password": "AnotherPass123" }),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Still active after the refused deactivation
    let (status, _) = ctx.send(get("/api/admin/verify", Some(&owner))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_deactivates_staff() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let owner = ctx.owner().await;
    let staff = ctx.staff().await;

    let (status, body) = ctx
        .send(json_request(
            Method::PATCH,
            &format!("/api/staff/{}", staff.account.id),
            Some(&owner),
            json!({ "isActive": false, "name": "Renamed Member" }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isActive"], false);
    assert_eq!(body["data"]["name"], "Renamed Member");

    let (status, _) = ctx.send(get("/api/admin/verify", Some(&staff))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reset_password_for_other_account() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let owner = ctx.owner().await;
    let staff = ctx.staff().await;

    let (status, body) = ctx
        .send(json_request(
            Method::POST,
            &format!("/api/staff/{}/reset-password", staff.account.id),
            Some(&owner),
            json!({ "password": "FreshPassword99" }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Password reset successfully.");

    let (status, _) = ctx
        .send(json_request(
            Method::POST,
            "/api/admin/login",
            None,
            json!({ "email": staff.account.email, "password": TEST_PASSWORD }),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = ctx
        .send(json_request(
            Method::POST,
            "/api/admin/login",
            None,
            json!({ "email": staff.account.email, "password": "FreshPassword99" }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_staff_then_not_found() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let owner = ctx.owner().await;
    let staff = ctx.staff().await;
    let uri = format!("/api/staff/{}", staff.account.id);

    let (status, body) = ctx.send(empty_request(Method::DELETE, &uri, Some(&owner))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Staff member deleted successfully.");

    let (status, body) = ctx.send(get(&uri, Some(&owner))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Staff member not found.");
}

#[tokio::test]
async fn test_non_uuid_staff_id_is_not_found() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let owner = ctx.owner().await;

    let (status, _) = ctx.send(get("/api/staff/ADM-12345", Some(&owner))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_staff_is_paginated() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let owner = ctx.owner().await;
    ctx.staff().await;

    let (status, body) = ctx.send(get("/api/staff?page=1&limit=1", Some(&owner))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["staff"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["pagination"]["limit"], 1);
    assert!(body["data"]["pagination"]["total"].as_i64().unwrap() >= 2);
}
