use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillForgeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    #[error("no active profile: create or load one first")]
    NoActiveProfile,

    #[error("invalid roadmap mode: {0}")]
    InvalidMode(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("roadmap generation failed: {0}")]
    RoadmapGeneration(String),

    #[error("missing configuration: set the {0} environment variable")]
    MissingConfig(String),
}

pub type Result<T> = std::result::Result<T, SkillForgeError>;
