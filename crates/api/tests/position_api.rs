//! HTTP-level tests for scene overrides and position resolution.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_entity, create_scene, delete, get, put_json};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn resolve(pool: &PgPool, kind: &str, id: i64, scene_id: Option<i64>) -> Value {
    let uri = match scene_id {
        Some(scene_id) => format!("/api/v1/entities/{kind}/{id}/position?scene_id={scene_id}"),
        None => format!("/api/v1/entities/{kind}/{id}/position"),
    };
    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn override_falls_back_to_default_then_unpositioned(pool: PgPool) {
    let scene_2 = create_scene(&pool, "scene-2").await;
    let scene_3 = create_scene(&pool, "scene-3").await;
    let e = create_entity(
        &pool,
        "product-panels",
        json!({"name": "E", "position_x": 1, "position_y": 1}),
    )
    .await;
    let e_id = e["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/entities/product-panels/{e_id}/position"),
        json!({"scene_id": scene_2, "x": 9, "y": 9}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let in_2 = resolve(&pool, "product-panels", e_id, Some(scene_2)).await;
    assert_eq!(in_2, json!({"position": {"x": 9, "y": 9}, "source": "override"}));

    let in_3 = resolve(&pool, "product-panels", e_id, Some(scene_3)).await;
    assert_eq!(in_3, json!({"position": {"x": 1, "y": 1}, "source": "default"}));

    let unscoped = resolve(&pool, "product-panels", e_id, None).await;
    assert_eq!(unscoped["source"], "default");

    // Rows from before placement was mandatory carry no coordinates.
    let f_id: i64 = sqlx::query_scalar(
        "INSERT INTO product_panels (name) VALUES ('F') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let f = resolve(&pool, "product-panels", f_id, Some(scene_2)).await;
    assert_eq!(f, json!({"position": null, "source": "unpositioned"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeated_upsert_keeps_one_override(pool: PgPool) {
    let scene_id = create_scene(&pool, "repeat").await;
    let entity = create_entity(&pool, "call-to-actions", json!({"name": "CTA"})).await;
    let id = entity["id"].as_i64().unwrap();
    let uri = format!("/api/v1/entities/call-to-actions/{id}/position");

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = put_json(app, &uri, json!({"scene_id": scene_id, "x": 20, "y": 30})).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, json!({"scene_id": scene_id, "x": 21, "y": 31})).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["position_x"], 21);
    assert_eq!(json["data"]["position_y"], 31);

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/entities/call-to-actions/{id}/overrides"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["scene_id"], scene_id);
    assert_eq!(rows[0]["entity_id"], id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn drag_payload_is_coerced(pool: PgPool) {
    let scene_id = create_scene(&pool, "drag").await;
    let entity = create_entity(&pool, "product-categories", json!({"name": "Drinks"})).await;
    let id = entity["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/entities/product-categories/{id}/position"),
        json!({"scene_id": scene_id.to_string(), "left": "12.7", "top": 48.2}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["position_x"], 12);
    assert_eq!(json["data"]["position_y"], 48);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_coordinate_is_a_field_error(pool: PgPool) {
    let scene_id = create_scene(&pool, "bad-x").await;
    let entity = create_entity(&pool, "product-panels", json!({"name": "P"})).await;
    let id = entity["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/entities/product-panels/{id}/position"),
        json!({"scene_id": scene_id, "x": "abc", "y": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "x");

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/entities/product-panels/{id}/position"),
        json!({"scene_id": scene_id, "x": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "y");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_parents_are_validation_errors(pool: PgPool) {
    let scene_id = create_scene(&pool, "parents").await;
    let entity = create_entity(&pool, "service-categories", json!({"name": "S"})).await;
    let id = entity["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/entities/service-categories/{id}/position"),
        json!({"scene_id": 999999, "x": 10, "y": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "scene_id");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/entities/service-categories/999999/position",
        json!({"scene_id": scene_id, "x": 10, "y": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "entity_id");

    // A soft-deleted scene is treated as missing.
    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/api/v1/scenes/{scene_id}")).await;
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/entities/service-categories/{id}/position"),
        json!({"scene_id": scene_id, "x": 10, "y": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "scene_id");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scene_categories_reject_overrides(pool: PgPool) {
    let scene_id = create_scene(&pool, "sectors").await;
    let entity = create_entity(
        &pool,
        "scene-categories",
        json!({"name": "Bathroom", "position_x": 60, "position_y": 20}),
    )
    .await;
    let id = entity["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/entities/scene-categories/{id}/position"),
        json!({"scene_id": scene_id, "x": 10, "y": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let resolved = resolve(&pool, "scene-categories", id, Some(scene_id)).await;
    assert_eq!(resolved["source"], "default");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn override_in_one_scene_does_not_leak(pool: PgPool) {
    let scene_2 = create_scene(&pool, "two").await;
    let scene_4 = create_scene(&pool, "four").await;
    let entity = create_entity(
        &pool,
        "service-sub-categories",
        json!({"name": "E", "position_x": 30, "position_y": 30}),
    )
    .await;
    let id = entity["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/entities/service-sub-categories/{id}/position"),
        json!({"scene_id": scene_2, "x": 70, "y": 70}),
    )
    .await;

    let resolved = resolve(&pool, "service-sub-categories", id, Some(scene_4)).await;
    assert_eq!(resolved, json!({"position": {"x": 30, "y": 30}, "source": "default"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn removing_override_reverts_to_default(pool: PgPool) {
    let scene_id = create_scene(&pool, "revert").await;
    let entity = create_entity(
        &pool,
        "product-panels",
        json!({"name": "R", "position_x": 5, "position_y": 6}),
    )
    .await;
    let id = entity["id"].as_i64().unwrap();
    let base = format!("/api/v1/entities/product-panels/{id}/position");

    let app = common::build_test_app(pool.clone());
    put_json(app, &base, json!({"scene_id": scene_id, "x": 50, "y": 60})).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("{base}/{scene_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let resolved = resolve(&pool, "product-panels", id, Some(scene_id)).await;
    assert_eq!(resolved["source"], "default");

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("{base}/{scene_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resolving_missing_entity_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/entities/call-to-actions/999999/position").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
