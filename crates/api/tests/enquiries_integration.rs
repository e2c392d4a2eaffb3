//! Integration tests for admission enquiries.

mod common;

use axum::http::{Method, StatusCode};
use common::{empty_request, get, json_request, TestContext};
use serde_json::{json, Value};

fn enquiry_body(branch: &str) -> Value {
    json!({
        "studentName": "Aarav Mehta",
        "parentName": "Sunita Mehta",
        "email": "sunita.mehta@example.com",
        "phone": "+91 98765 43210",
        "branch": branch,
        "grade": "Class 5",
        "message": "Interested in the upcoming session."
    })
}

async fn submit(ctx: &TestContext, branch: &str) -> Value {
    let (status, body) = ctx
        .send(json_request(Method::POST, "/api/enquiries", None, enquiry_body(branch)))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_public_submit_returns_receipt() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };

    let body = submit(&ctx, "South Campus").await;

    assert_eq!(body["success"], true);
    let enquiry_id = body["data"]["enquiryId"].as_str().unwrap();
    assert!(enquiry_id.starts_with("ENQ-"));
    assert_eq!(enquiry_id.len(), 12);
    assert_eq!(body["data"]["studentName"], "Aarav Mehta");
    assert_eq!(body["data"]["branch"], "South Campus");
    // The receipt does not echo contact details
    assert!(body["data"].get("email").is_none());
}

#[tokio::test]
async fn test_submit_rejects_unknown_branch() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };

    let (status, body) = ctx
        .send(json_request(Method::POST, "/api/enquiries", None, enquiry_body("West Campus")))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_submit_rejects_short_phone() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let mut body = enquiry_body("North Campus");
    body["phone"] = json!("12345");

    let (status, body) = ctx
        .send(json_request(Method::POST, "/api/enquiries", None, body))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Phone number must be at least 10 characters");
}

#[tokio::test]
async fn test_list_requires_auth() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };

    let (status, _) = ctx.send(get("/api/enquiries", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_by_business_id_and_uuid() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let staff = ctx.staff().await;
    let receipt = submit(&ctx, "East Campus").await;
    let enquiry_id = receipt["data"]["enquiryId"].as_str().unwrap();

    let (status, body) = ctx
        .send(get(&format!("/api/enquiries/{}", enquiry_id), Some(&staff)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["email"], "sunita.mehta@example.com");

    let uuid = body["data"]["id"].as_str().unwrap().to_string();
    let (status, body) = ctx
        .send(get(&format!("/api/enquiries/{}", uuid), Some(&staff)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["enquiryId"], enquiry_id);
}

#[tokio::test]
async fn test_get_unknown_enquiry() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let staff = ctx.staff().await;

    let (status, body) = ctx.send(get("/api/enquiries/ENQ-00000000", Some(&staff))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Enquiry not found.");

    let (status, _) = ctx.send(get("/api/enquiries/not-an-id", Some(&staff))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_status_any_transition() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let staff = ctx.staff().await;
    let receipt = submit(&ctx, "North Campus").await;
    let uri = format!("/api/enquiries/{}/status", receipt["data"]["enquiryId"].as_str().unwrap());

    for status_value in ["enrolled", "pending", "rejected", "contacted"] {
        let (status, body) = ctx
            .send(json_request(Method::PATCH, &uri, Some(&staff), json!({ "status": status_value })))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], status_value);
    }

    let (status, _) = ctx
        .send(json_request(Method::PATCH, &uri, Some(&staff), json!({ "status": "archived" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_filters_and_paginates() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let staff = ctx.staff().await;
    submit(&ctx, "South Campus").await;
    submit(&ctx, "South Campus").await;

    let (status, body) = ctx
        .send(get("/api/enquiries?branch=South%20Campus&limit=1&page=1", Some(&staff)))
        .await;

    assert_eq!(status, StatusCode::OK);
    let items = body["data"]["enquiries"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["branch"], "South Campus");
    assert!(body["data"]["pagination"]["total"].as_i64().unwrap() >= 2);
    assert!(body["data"]["pagination"]["totalPages"].as_i64().unwrap() >= 2);
}

#[tokio::test]
async fn test_stats_counts_every_status() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let staff = ctx.staff().await;
    submit(&ctx, "North Campus").await;

    let (status, body) = ctx.send(get("/api/enquiries/stats", Some(&staff))).await;

    assert_eq!(status, StatusCode::OK);
    let overall = &body["data"]["overall"];
    let sum: i64 = ["pending", "contacted", "enrolled", "rejected"]
        .iter()
        .map(|key| overall[*key].as_i64().unwrap())
        .sum();
    assert_eq!(sum, overall["total"].as_i64().unwrap());
    assert!(body["data"]["byBranch"].as_array().is_some());
}

#[tokio::test]
async fn test_delete_enquiry() {
    let Some(ctx) = TestContext::setup().await else {
        return;
    };
    let staff = ctx.staff().await;
    let receipt = submit(&ctx, "East Campus").await;
    let uri = format!("/api/enquiries/{}", receipt["data"]["enquiryId"].as_str().unwrap());

    let (status, body) = ctx.send(empty_request(Method::DELETE, &uri, Some(&staff))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Enquiry deleted successfully.");

    let (status, _) = ctx.send(empty_request(Method::DELETE, &uri, Some(&staff))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
