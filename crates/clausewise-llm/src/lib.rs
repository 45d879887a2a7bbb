//! Language-model enhancement: plain-English insights from a local Ollama server.
//!
//! Everything here augments an analysis after the fact. When the model is
//! disabled or unreachable the client returns un-enhanced values instead of
//! failing, so callers never depend on it for correctness.

mod client;
mod config;
mod error;
mod insight;
pub mod parse;
pub mod prompts;

pub use client::OllamaClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, LlmConfig};
pub use error::LlmError;
pub use insight::{LlmInsight, LlmStatus};
