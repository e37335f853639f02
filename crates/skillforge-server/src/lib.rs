pub mod error;
pub mod routes;
pub mod state;
pub mod ui;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub use state::AppState;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(ui::index))
        // Profile
        .route("/api/profile", get(routes::profile::get_profile))
        .route("/api/profile", post(routes::profile::create_profile))
        .route("/api/profile/load", post(routes::profile::load_profile))
        .route(
            "/api/profile/completed",
            post(routes::profile::mark_completed),
        )
        // Roadmap
        .route("/api/roadmap", post(routes::roadmap::generate_roadmap))
        .layer(cors)
        .with_state(app_state)
}

/// Start the SkillForge web UI on a pre-bound listener.
///
/// Accepts a `TcpListener` that was already bound so the caller can read the
/// actual port before starting (useful when the requested port is 0 and the
/// OS picks a free one).
pub async fn serve_on(
    app_state: AppState,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(app_state);

    tracing::info!("SkillForge UI listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
