//! Shot breakdown payload types and the fixed fallback breakdown.
//!
//! The model is *asked* to produce this shape (see [`crate::prompt`])
//! but its output is passed through unvalidated; the typed structs here
//! exist for the documented contract and for the fallback payload
//! returned when generation or parsing fails.

use serde::{Deserialize, Serialize};

/// A single shot in a breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    /// e.g. "Wide Shot", "Medium Shot", "Close-up".
    pub shot_type: String,
    /// What to capture.
    pub description: String,
    /// e.g. "static", "pan", "dolly", "tracking".
    pub camera_movement: String,
    /// e.g. "natural", "low-key", "high-key".
    pub lighting: String,
    /// Free text, typically "X-Y seconds".
    pub duration: String,
}

/// A full cinematography breakdown for one scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotBreakdown {
    /// e.g. "dialogue", "action", "establishing" (open set).
    pub scene_type: String,
    pub mood: String,
    pub shots: Vec<Shot>,
    pub equipment: Vec<String>,
    pub tips: Vec<String>,
}

/// The fixed breakdown returned when the model call or response parsing
/// fails. Generic enough to be usable advice for most scenes.
pub fn fallback_breakdown() -> ShotBreakdown {
    ShotBreakdown {
        scene_type: "dialogue".to_string(),
        mood: "tense".to_string(),
        shots: vec![
            Shot {
                shot_type: "Wide Establishing Shot".to_string(),
                description: "Capture the full environment and character positions".to_string(),
                camera_movement: "static".to_string(),
                lighting: "natural with fill".to_string(),
                duration: "5-7 seconds".to_string(),
            },
            Shot {
                shot_type: "Medium Shot".to_string(),
                description: "Frame characters from waist up showing interactions".to_string(),
                camera_movement: "slow dolly".to_string(),
                lighting: "three-point setup".to_string(),
                duration: "4-6 seconds".to_string(),
            },
        ],
        equipment: vec![
            "Cinema camera or DSLR".to_string(),
            "24-70mm lens".to_string(),
            "Tripod with fluid head".to_string(),
            "LED panel lights".to_string(),
            "Lavalier microphones".to_string(),
        ],
        tips: vec![
            "Shoot at 24fps for cinematic look".to_string(),
            "Use manual focus for control".to_string(),
            "Record room tone for audio".to_string(),
            "Get multiple takes for coverage".to_string(),
        ],
    }
}
