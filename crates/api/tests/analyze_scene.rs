//! Integration tests for POST /api/analyze-scene: validation, the
//! pass-through of clean model output, and the catch-and-fallback policy.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, StubGenerator};
use serde_json::json;

/// Keys every breakdown response must carry, genuine or fallback.
const BREAKDOWN_KEYS: &[&str] = &["sceneType", "mood", "shots", "equipment", "tips"];

fn clean_model_output() -> String {
    json!({
        "sceneType": "action",
        "mood": "frantic",
        "shots": [{
            "shotType": "Tracking Shot",
            "description": "Follow the car through the alley",
            "cameraMovement": "tracking",
            "lighting": "low-key",
            "duration": "6-8 seconds"
        }],
        "equipment": ["Gimbal"],
        "tips": ["Pre-run the route"]
    })
    .to_string()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_scene_returns_400_with_exact_message() {
    let app = common::build_test_app(StubGenerator::Respond(clean_model_output()));
    let response = post_json(app, "/api/analyze-scene", json!({ "scene": "" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Scene description is required");
}

#[tokio::test]
async fn missing_scene_key_returns_400_with_exact_message() {
    let app = common::build_test_app(StubGenerator::Respond(clean_model_output()));
    let response = post_json(app, "/api/analyze-scene", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Scene description is required");
}

#[tokio::test]
async fn null_scene_returns_400_with_exact_message() {
    let app = common::build_test_app(StubGenerator::Respond(clean_model_output()));
    let response = post_json(app, "/api/analyze-scene", json!({ "scene": null })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Scene description is required");
}

// ---------------------------------------------------------------------------
// Genuine model output passes through
// ---------------------------------------------------------------------------

#[tokio::test]
async fn clean_model_output_is_returned_as_is() {
    let app = common::build_test_app(StubGenerator::Respond(clean_model_output()));
    let response = post_json(
        app,
        "/api/analyze-scene",
        json!({ "scene": "A car chase through narrow alleys" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["sceneType"], "action");
    assert_eq!(body["mood"], "frantic");
    assert_eq!(body["shots"][0]["shotType"], "Tracking Shot");
    assert_eq!(body["fallback"], false);
}

#[tokio::test]
async fn fenced_model_output_is_unwrapped() {
    let fenced = format!("```json\n{}\n```", clean_model_output());
    let app = common::build_test_app(StubGenerator::Respond(fenced));
    let response = post_json(
        app,
        "/api/analyze-scene",
        json!({ "scene": "A car chase through narrow alleys" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["sceneType"], "action");
    assert_eq!(body["fallback"], false);
}

#[tokio::test]
async fn unexpected_model_keys_pass_through_unvalidated() {
    // No schema validation: whatever object the model produced is
    // returned, even when it matches none of the prompted fields.
    let app = common::build_test_app(StubGenerator::Respond(
        json!({ "surprise": true }).to_string(),
    ));
    let response = post_json(app, "/api/analyze-scene", json!({ "scene": "anything" })).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["surprise"], true);
    assert_eq!(body["fallback"], false);
}

// ---------------------------------------------------------------------------
// Fallback policy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generator_failure_yields_200_with_fallback_breakdown() {
    let app = common::build_test_app(StubGenerator::Fail("connection refused".into()));
    let response = post_json(
        app,
        "/api/analyze-scene",
        json!({ "scene": "Two old friends argue over dinner" }),
    )
    .await;

    // Masked as success, per the original contract.
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["fallback"], true);
    for key in BREAKDOWN_KEYS {
        assert!(body.get(*key).is_some(), "fallback body is missing {key}");
    }
    assert_eq!(body["shots"].as_array().unwrap().len(), 2);
    assert_eq!(body["shots"][0]["shotType"], "Wide Establishing Shot");
}

#[tokio::test]
async fn model_output_without_braces_yields_fallback() {
    let app = common::build_test_app(StubGenerator::Respond(
        "I'm sorry, I can't produce JSON for that.".into(),
    ));
    let response = post_json(app, "/api/analyze-scene", json!({ "scene": "anything" })).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["fallback"], true);
    assert_eq!(body["sceneType"], "dialogue");
}

#[tokio::test]
async fn model_output_with_reversed_braces_yields_fallback() {
    let app = common::build_test_app(StubGenerator::Respond("} nothing here {".into()));
    let response = post_json(app, "/api/analyze-scene", json!({ "scene": "anything" })).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["fallback"], true);
}

#[tokio::test]
async fn unparseable_model_json_yields_fallback() {
    let app = common::build_test_app(StubGenerator::Respond("{definitely not json}".into()));
    let response = post_json(app, "/api/analyze-scene", json!({ "scene": "anything" })).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["fallback"], true);
}

// ---------------------------------------------------------------------------
// Contract: every non-empty scene gets the breakdown keys
// ---------------------------------------------------------------------------

#[tokio::test]
async fn every_outcome_carries_the_breakdown_keys() {
    for generator in [
        StubGenerator::Respond(clean_model_output()),
        StubGenerator::Fail("boom".into()),
    ] {
        let app = common::build_test_app(generator);
        let response = post_json(app, "/api/analyze-scene", json!({ "scene": "a scene" })).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        for key in BREAKDOWN_KEYS {
            assert!(body.get(*key).is_some(), "response is missing {key}");
        }
    }
}
