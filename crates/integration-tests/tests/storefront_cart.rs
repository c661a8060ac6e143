//! Integration tests for the shared cart.

use pocketshop_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn add_to_cart(ctx: &TestContext, product_id: i32, quantity: i64) -> reqwest::Response {
    ctx.client
        .post(ctx.url("/cart/add"))
        .json(&json!({"product_id": product_id, "quantity": quantity}))
        .send()
        .await
        .expect("cart add request")
}

async fn view_cart(ctx: &TestContext) -> Value {
    ctx.client
        .get(ctx.url("/cart"))
        .send()
        .await
        .expect("cart request")
        .json()
        .await
        .expect("cart body")
}

#[tokio::test]
async fn test_empty_cart_has_zero_total() {
    let ctx = TestContext::spawn().await;

    let cart = view_cart(&ctx).await;
    assert_eq!(cart["total"], 0);
    assert_eq!(cart["items"], json!([]));
}

#[tokio::test]
async fn test_add_accumulates_running_total() {
    let ctx = TestContext::spawn().await;

    let resp = add_to_cart(&ctx, 1, 2).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("ack body");
    assert_eq!(body["message"], "added");

    add_to_cart(&ctx, 3, 1).await;

    let cart = view_cart(&ctx).await;
    assert_eq!(cart["total"], 399 * 2 + 2499);
    assert_eq!(cart["items"].as_array().expect("items array").len(), 2);
    assert_eq!(cart["items"][0]["product"]["name"], "T-shirt");
    assert_eq!(cart["items"][0]["quantity"], 2);
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let ctx = TestContext::spawn().await;

    let resp = add_to_cart(&ctx, 42, 1).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("error body");
    assert!(body["error"].is_string());

    let cart = view_cart(&ctx).await;
    assert_eq!(cart["items"], json!([]));
}

#[tokio::test]
async fn test_add_missing_quantity_is_stored_as_zero() {
    let ctx = TestContext::spawn().await;

    let resp = ctx
        .client
        .post(ctx.url("/cart/add"))
        .json(&json!({"product_id": 2}))
        .send()
        .await
        .expect("cart add request");
    assert_eq!(resp.status(), StatusCode::OK);

    let cart = view_cart(&ctx).await;
    assert_eq!(cart["items"][0]["quantity"], 0);
    assert_eq!(cart["total"], 0);
}

#[tokio::test]
async fn test_add_rejects_malformed_body() {
    let ctx = TestContext::spawn().await;

    let resp = ctx
        .client
        .post(ctx.url("/cart/add"))
        .json(&json!({"product_id": "two"}))
        .send()
        .await
        .expect("cart add request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_out_of_range_leaves_cart_unchanged() {
    let ctx = TestContext::spawn().await;
    add_to_cart(&ctx, 1, 1).await;
    add_to_cart(&ctx, 2, 1).await;

    let resp = ctx
        .client
        .delete(ctx.url("/cart/remove/5"))
        .send()
        .await
        .expect("cart remove request");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let cart = view_cart(&ctx).await;
    assert_eq!(cart["items"].as_array().expect("items array").len(), 2);
}

#[tokio::test]
async fn test_remove_non_numeric_position_is_not_found() {
    let ctx = TestContext::spawn().await;
    add_to_cart(&ctx, 1, 1).await;

    let resp = ctx
        .client
        .delete(ctx.url("/cart/remove/abc"))
        .send()
        .await
        .expect("cart remove request");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let cart = view_cart(&ctx).await;
    assert_eq!(cart["items"].as_array().expect("items array").len(), 1);
}

#[tokio::test]
async fn test_remove_shifts_later_positions_down() {
    let ctx = TestContext::spawn().await;
    add_to_cart(&ctx, 1, 1).await;
    add_to_cart(&ctx, 2, 1).await;
    add_to_cart(&ctx, 3, 1).await;

    let resp = ctx
        .client
        .delete(ctx.url("/cart/remove/2"))
        .send()
        .await
        .expect("cart remove request");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("ack body");
    assert_eq!(body["message"], "removed");

    let cart = view_cart(&ctx).await;
    let names: Vec<&str> = cart["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|i| i["product"]["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, ["T-shirt", "Sneakers"]);
}
