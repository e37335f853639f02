use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiAgentError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("response contained no candidates")]
    EmptyResponse,
}
