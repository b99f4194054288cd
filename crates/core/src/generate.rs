//! The seam between the request handler and the hosted model.
//!
//! The API crate holds a `dyn TextGenerator` so the production Gemini
//! client and test stubs are interchangeable.

use crate::error::CoreError;

/// A text-generation backend: one prompt in, one free-form text out.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// Implementations should map transport and API failures into
    /// [`CoreError::Generation`]; the caller decides what failure means
    /// (the analyze-scene handler masks it with the fallback payload).
    async fn generate(&self, prompt: &str) -> Result<String, CoreError>;
}
