//! Handler for the scene analysis endpoint.
//!
//! Routes:
//! - `POST /api/analyze-scene` — AI shot breakdown for a scene description

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};

use cinelens_core::error::CoreError;
use cinelens_core::{breakdown, extract, prompt};

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /api/analyze-scene`.
///
/// `scene` tolerates an absent key and an explicit `null`; both are
/// rejected by the same validation as an empty string.
#[derive(Debug, Deserialize)]
pub struct AnalyzeSceneRequest {
    #[serde(default)]
    pub scene: Option<String>,
}

/// POST /api/analyze-scene
///
/// Validates the scene description, asks the generator for a shot
/// breakdown, and post-processes the model text into JSON. Any failure
/// past validation is logged and masked with the fixed fallback
/// breakdown, still as HTTP 200 -- callers see which case they got via
/// the injected top-level `"fallback"` boolean.
pub async fn analyze_scene(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeSceneRequest>,
) -> AppResult<Json<Map<String, Value>>> {
    let scene = input.scene.as_deref().unwrap_or("");
    if scene.is_empty() {
        return Err(CoreError::Validation("Scene description is required".to_string()).into());
    }

    let prompt = prompt::shot_breakdown_prompt(scene);

    let result = match state.generator.generate(&prompt).await {
        Ok(raw) => extract::parse_model_response(&raw),
        Err(e) => Err(e),
    };

    let body = match result {
        Ok(mut breakdown) => {
            breakdown.insert("fallback".to_string(), Value::Bool(false));
            breakdown
        }
        Err(e) => {
            tracing::error!(error = %e, "Scene analysis failed, returning fallback breakdown");
            fallback_body()
        }
    };

    Ok(Json(body))
}

/// The fixed fallback breakdown as a response object, tagged
/// `"fallback": true`.
fn fallback_body() -> Map<String, Value> {
    let mut body = match serde_json::to_value(breakdown::fallback_breakdown()) {
        Ok(Value::Object(map)) => map,
        // ShotBreakdown always serializes to an object.
        _ => Map::new(),
    };
    body.insert("fallback".to_string(), Value::Bool(true));
    body
}
