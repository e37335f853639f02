use gemini_agent::GeminiClient;
use skillforge_core::{Config, FirestoreStore, Workflow};
use std::sync::{Arc, Mutex};

/// Shared application state passed to all route handlers.
///
/// The workflow is synchronous, so handlers lock it inside `spawn_blocking`.
/// One server process hosts one session context: a single active-profile
/// slot, exactly like the CLI loop.
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<Mutex<Workflow>>,
}

impl AppState {
    pub fn new(workflow: Workflow) -> Self {
        Self {
            workflow: Arc::new(Mutex::new(workflow)),
        }
    }

    /// Wire up the production store and roadmap client from configuration.
    pub fn from_config(config: &Config) -> Self {
        let store = FirestoreStore::new(
            config.firestore_project_id.clone(),
            config.firestore_api_key.clone(),
        );
        let roadmap = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
        Self::new(Workflow::new(Box::new(store), Box::new(roadmap)))
    }
}
