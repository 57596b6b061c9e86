//! HTTP-level integration tests for the hero slides admin CRUD.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, delete_auth, get_auth, post_json_auth, put_json_auth,
};
use sqlx::PgPool;

fn spring_sale_slide() -> serde_json::Value {
    serde_json::json!({
        "title": "Spring Sale",
        "description": "Up to 30% off",
        "image_url": "https://cdn.example.com/hero-images/spring.png",
        "display_order": 2,
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_returns_slide_and_refreshed_list(pool: PgPool) {
    let app = build_test_app(pool);
    let response =
        post_json_auth(app, "/api/v1/hero-slides", &admin_token(), spring_sale_slide()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Spring Sale");
    assert_eq!(json["data"]["display_order"], 2);
    assert_eq!(json["data"]["is_active"], true);
    assert_eq!(json["records"].as_array().map(Vec::len), Some(1));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_title_and_image(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/hero-slides",
        &admin_token(),
        serde_json::json!({
            "title": "   ",
            "image_url": "https://cdn.example.com/hero-images/x.png",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["violations"]
        .as_array()
        .unwrap()
        .iter()
        .any(|v| v["field"] == "title"));

    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/hero-slides",
        &admin_token(),
        serde_json::json!({ "title": "No image yet", "image_url": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_follows_display_order(pool: PgPool) {
    for (title, order) in [("Second", 5), ("First", 1), ("Third", 9)] {
        let app = build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/hero-slides",
            &admin_token(),
            serde_json::json!({
                "title": title,
                "image_url": "https://cdn.example.com/hero-images/x.png",
                "display_order": order,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/hero-slides", &admin_token()).await).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_applies_only_submitted_fields(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json_auth(app, "/api/v1/hero-slides", &admin_token(), spring_sale_slide()).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/hero-slides/{id}"),
        &admin_token(),
        serde_json::json!({
            "title": "Summer Sale",
            "image_url": "https://cdn.example.com/hero-images/summer.png",
            "display_order": 1,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Summer Sale");
    // Description was not submitted and keeps its stored value.
    assert_eq!(json["data"]["description"], "Up to 30% off");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_toggle_missing_slide_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/hero-slides/31337/active",
        &admin_token(),
        serde_json::json!({ "is_active": false }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_returns_refreshed_list(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json_auth(app, "/api/v1/hero-slides", &admin_token(), spring_sale_slide()).await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/hero-slides/{id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().map(Vec::len), Some(0));
}
