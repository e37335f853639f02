use axum::extract::State;
use axum::Json;
use skillforge_core::RoadmapMode;
use std::str::FromStr;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct GenerateRoadmapBody {
    /// `"full"` or `"incremental"`. The form adapter regenerates from
    /// scratch by default, so an absent mode means full.
    #[serde(default)]
    pub mode: Option<String>,
}

/// POST /api/roadmap — build the prompt for the active profile and forward
/// it to the generation endpoint.
pub async fn generate_roadmap(
    State(app): State<AppState>,
    Json(body): Json<GenerateRoadmapBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mode = match body.mode.as_deref() {
        Some(raw) => RoadmapMode::from_str(raw)?,
        None => RoadmapMode::Full,
    };

    let workflow = app.workflow.clone();
    let roadmap = tokio::task::spawn_blocking(move || {
        let wf = workflow
            .lock()
            .map_err(|_| anyhow::anyhow!("workflow lock poisoned"))?;
        Ok::<_, anyhow::Error>(wf.generate_roadmap(mode)?)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({
        "mode": mode.to_string(),
        "roadmap": roadmap,
    })))
}
