//! Caption, hashtag and hook generation for social media posts.
//!
//! A single `POST /api/generate` endpoint composes an Indonesian-language
//! prompt from the request fields, asks a generative model for JSON that
//! matches a fixed schema, and returns the parsed result.

pub mod api_client;
pub mod composer;
pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod logger;
pub mod models;
pub mod provider;
pub mod server;

pub use api_client::GenerateApiClient;
pub use config::{Config, GeminiConfig};
pub use error::{GenerationError, Result};
pub use gemini::GeminiClient;
pub use generator::ContentGenerator;
pub use models::*;
pub use provider::GenerativeModel;
