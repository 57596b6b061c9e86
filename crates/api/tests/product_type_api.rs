//! HTTP-level integration tests for the product types admin CRUD.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, build_test_app, delete_auth, get_auth, post_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_trims_and_returns_refreshed_list(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/product-types",
        &admin_token(),
        serde_json::json!({ "name": "  Voice Control  " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Voice Control");
    assert_eq!(json["records"].as_array().map(Vec::len), Some(1));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_name_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/product-types",
        &admin_token(),
        serde_json::json!({ "name": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_name_is_rejected_ignoring_case(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/product-types",
        &admin_token(),
        serde_json::json!({ "name": "WebOS" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    for name in ["WebOS", "webos", "WEBOS"] {
        let app = build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/product-types",
            &admin_token(),
            serde_json::json!({ "name": name }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "name: {name}");
    }

    // Still exactly one stored type.
    let app = build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/product-types", &admin_token()).await).await;
    assert_eq!(json["data"].as_array().map(Vec::len), Some(1));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_is_ordered_case_insensitively(pool: PgPool) {
    for name in ["zenith", "Alpha", "beta"] {
        let app = build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/product-types",
            &admin_token(),
            serde_json::json!({ "name": name }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/product-types", &admin_token()).await).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha", "beta", "zenith"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_leaves_product_names_untouched(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let created = body_json(
        post_json_auth(
            app,
            "/api/v1/product-types",
            &admin_token(),
            serde_json::json!({ "name": "Voice Control" }),
        )
        .await,
    )
    .await;
    let type_id = created["data"]["id"].as_i64().unwrap();

    // A product composed with that type.
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/products",
        &admin_token(),
        serde_json::json!({
            "category": "32 inch",
            "model": "Gold Series",
            "type_name": "Voice Control",
            "price": 28_500,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_test_app(pool.clone());
    let response =
        delete_auth(app, &format!("/api/v1/product-types/{type_id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().map(Vec::len), Some(0));

    // No cascade: the product keeps its composed name.
    let app = build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/products", &admin_token()).await).await;
    assert_eq!(json["data"][0]["name"], "Gold Series - Voice Control");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_type_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete_auth(app, "/api/v1/product-types/8888", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
