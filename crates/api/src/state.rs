use std::sync::Arc;

use cinelens_core::generate::TextGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The text-generation backend (Gemini in production, stubs in tests).
    pub generator: Arc<dyn TextGenerator>,
}
