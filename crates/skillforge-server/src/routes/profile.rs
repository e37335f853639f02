use axum::extract::State;
use axum::Json;
use skillforge_core::Profile;

use crate::error::AppError;
use crate::state::AppState;

fn profile_json(profile: &Profile) -> serde_json::Value {
    serde_json::json!({
        "name": profile.name,
        "current_role": profile.current_role,
        "skills": profile.skills,
        "goal": profile.goal,
        "completed": profile.completed,
    })
}

/// GET /api/profile — snapshot of the active profile.
pub async fn get_profile(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let workflow = app.workflow.clone();
    let profile = tokio::task::spawn_blocking(move || {
        let wf = workflow
            .lock()
            .map_err(|_| anyhow::anyhow!("workflow lock poisoned"))?;
        Ok::<_, anyhow::Error>(wf.view()?.clone())
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(profile_json(&profile)))
}

#[derive(serde::Deserialize)]
pub struct CreateProfileBody {
    pub name: String,
    pub current_role: String,
    /// Comma-separated skill list, split and trimmed server-side.
    #[serde(default)]
    pub skills: String,
    pub goal: String,
}

/// POST /api/profile — create a profile and make it active.
pub async fn create_profile(
    State(app): State<AppState>,
    Json(body): Json<CreateProfileBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let workflow = app.workflow.clone();
    let profile = tokio::task::spawn_blocking(move || {
        let mut wf = workflow
            .lock()
            .map_err(|_| anyhow::anyhow!("workflow lock poisoned"))?;
        let profile = wf
            .create(&body.name, &body.current_role, &body.skills, &body.goal)?
            .clone();
        Ok::<_, anyhow::Error>(profile)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(profile_json(&profile)))
}

#[derive(serde::Deserialize)]
pub struct LoadProfileBody {
    pub name: String,
}

/// POST /api/profile/load — load a stored profile and make it active.
pub async fn load_profile(
    State(app): State<AppState>,
    Json(body): Json<LoadProfileBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let workflow = app.workflow.clone();
    let profile = tokio::task::spawn_blocking(move || {
        let mut wf = workflow
            .lock()
            .map_err(|_| anyhow::anyhow!("workflow lock poisoned"))?;
        Ok::<_, anyhow::Error>(wf.load(&body.name)?.clone())
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(profile_json(&profile)))
}

#[derive(serde::Deserialize)]
pub struct MarkCompletedBody {
    pub skill: String,
}

/// POST /api/profile/completed — append a completed skill and persist.
pub async fn mark_completed(
    State(app): State<AppState>,
    Json(body): Json<MarkCompletedBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let workflow = app.workflow.clone();
    let profile = tokio::task::spawn_blocking(move || {
        let mut wf = workflow
            .lock()
            .map_err(|_| anyhow::anyhow!("workflow lock poisoned"))?;
        wf.mark_completed(&body.skill)?;
        Ok::<_, anyhow::Error>(wf.view()?.clone())
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(profile_json(&profile)))
}
