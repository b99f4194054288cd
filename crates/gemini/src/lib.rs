//! REST client for the Google Gemini `generateContent` endpoint.

pub mod client;

pub use client::{GeminiClient, GeminiError};
