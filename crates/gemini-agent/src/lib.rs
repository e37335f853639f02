//! `gemini-agent` — client for the Google Generative Language REST API.
//!
//! Wraps the `models/{model}:generateContent` endpoint behind a single
//! blocking call: prompt in, generated text out. No retries, no built-in
//! timeout, no post-processing of the model output — every endpoint failure
//! (transport, auth, quota, content policy) collapses into one error type
//! carrying the underlying message.
//!
//! ```rust,ignore
//! use gemini_agent::GeminiClient;
//!
//! let client = GeminiClient::new("api-key", "gemini-2.5-flash");
//! let text = client.generate_content("Write a motivational quote.")?;
//! println!("{text}");
//! ```
//!
//! [`GeminiClient`] also implements `skillforge_core::RoadmapClient`, so it
//! plugs directly into the workflow controller.

pub mod client;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiAgentError;

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, GeminiAgentError>;
