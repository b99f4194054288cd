//! Prompt template for the shot-breakdown request.

/// Build the cinematographer prompt for a scene description.
///
/// The scene text is embedded verbatim. The prompt spells out the exact
/// JSON shape expected back and asks for JSON only -- no markdown, no
/// surrounding prose. That instruction is advisory: models still wrap
/// output in code fences often enough that [`crate::extract`] strips
/// them before parsing.
pub fn shot_breakdown_prompt(scene: &str) -> String {
    format!(
        r#"You are a professional cinematographer. Analyze this movie scene and provide a detailed shot breakdown.

Scene: {scene}

Respond with ONLY valid JSON in this exact format (no markdown, no extra text):
{{
  "sceneType": "dialogue/action/establishing",
  "mood": "describe the mood",
  "shots": [
    {{
      "shotType": "Wide Shot/Medium Shot/Close-up",
      "description": "detailed description of what to capture",
      "cameraMovement": "static/pan/dolly/tracking",
      "lighting": "natural/low-key/high-key",
      "duration": "X-Y seconds"
    }}
  ],
  "equipment": ["list", "of", "equipment"],
  "tips": ["practical", "shooting", "advice"]
}}"#
    )
}
