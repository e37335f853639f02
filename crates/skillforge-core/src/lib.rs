//! SkillForge core — profile persistence and the roadmap-request workflow.
//!
//! The presentation adapters (`skillforge-cli`, `skillforge-server`) call
//! only [`Workflow`]; persistence and roadmap generation are injected at
//! construction through the [`ProfileStore`] and [`RoadmapClient`] seams.

pub mod config;
pub mod error;
pub mod profile;
pub mod prompt;
pub mod store;
pub mod workflow;

pub use config::Config;
pub use error::{Result, SkillForgeError};
pub use profile::{parse_skills, Profile};
pub use prompt::{build_prompt, RoadmapMode};
pub use store::{FirestoreStore, MemoryStore, ProfileStore};
pub use workflow::{RoadmapClient, Workflow};
