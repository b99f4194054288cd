//! Domain logic for the CineLens backend.
//!
//! Everything here is independent of the HTTP layer: the shot breakdown
//! types and fallback payload, the prompt template sent to the model,
//! the JSON-extraction post-processing applied to model output, the
//! heuristic scene analyzer, and the [`TextGenerator`] seam the API
//! crate calls through.

pub mod analysis;
pub mod breakdown;
pub mod classifier;
pub mod error;
pub mod extract;
pub mod generate;
pub mod prompt;

pub use error::CoreError;
pub use generate::TextGenerator;
