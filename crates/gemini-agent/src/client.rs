use crate::error::GeminiAgentError;
use crate::types::{api_error_message, GenerateContentRequest, GenerateContentResponse};
use crate::Result;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

/// Handle to the Generative Language endpoint for one configured model.
///
/// The model identifier is treated as an opaque configuration string. Calls
/// block until the endpoint responds; a caller that stops waiting simply
/// discards the eventual result.
pub struct GeminiClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, model, GEMINI_BASE_URL)
    }

    /// Point the client at a non-default endpoint. Used by tests.
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Send a prompt to `models/{model}:generateContent` and return the
    /// generated text unmodified.
    pub fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "sending generateContent request");

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GeminiAgentError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let body: GenerateContentResponse = response.json()?;
        match body.first_text() {
            Some(text) => Ok(text.to_string()),
            None => Err(GeminiAgentError::EmptyResponse),
        }
    }
}

/// Plug into the workflow controller: any agent failure collapses into the
/// core's single roadmap-generation error kind, message preserved.
impl skillforge_core::RoadmapClient for GeminiClient {
    fn generate(&self, prompt: &str) -> skillforge_core::Result<String> {
        self.generate_content(prompt)
            .map_err(|e| skillforge_core::SkillForgeError::RoadmapGeneration(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
