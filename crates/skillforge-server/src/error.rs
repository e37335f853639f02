use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use skillforge_core::SkillForgeError;

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<SkillForgeError>() {
            match e {
                SkillForgeError::Validation(_)
                | SkillForgeError::InvalidMode(_)
                | SkillForgeError::MissingConfig(_) => StatusCode::BAD_REQUEST,
                SkillForgeError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
                SkillForgeError::NoActiveProfile => StatusCode::CONFLICT,
                SkillForgeError::Store(_) | SkillForgeError::RoadmapGeneration(_) => {
                    StatusCode::BAD_GATEWAY
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
