use crate::error::{Result, SkillForgeError};
use crate::profile::{parse_skills, Profile};
use crate::prompt::{build_prompt, RoadmapMode};
use crate::store::ProfileStore;

// ---------------------------------------------------------------------------
// RoadmapClient
// ---------------------------------------------------------------------------

/// Sends a built prompt to the text-generation endpoint and returns the raw
/// text. Blocking, unbounded latency, no retries: any endpoint failure
/// surfaces as [`SkillForgeError::RoadmapGeneration`] with the underlying
/// message.
pub trait RoadmapClient {
    fn generate(&self, prompt: &str) -> Result<String>;
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// Sequences the profile operations against the injected store and roadmap
/// client, holding the single active profile for the session.
///
/// One instance per session context; the controller performs no I/O of its
/// own beyond delegating, and never recovers from a failure — every error is
/// returned to the presentation adapter, and the session can continue after
/// any of them.
pub struct Workflow {
    store: Box<dyn ProfileStore + Send>,
    roadmap: Box<dyn RoadmapClient + Send>,
    active: Option<Profile>,
}

impl Workflow {
    pub fn new(store: Box<dyn ProfileStore + Send>, roadmap: Box<dyn RoadmapClient + Send>) -> Self {
        Self {
            store,
            roadmap,
            active: None,
        }
    }

    /// Create a profile, persist it, and make it the active profile.
    ///
    /// `name`, `role` and `goal` must be non-empty after trimming; the check
    /// happens before any store write. `skills_csv` is split on commas with
    /// whitespace-only entries dropped. `completed` starts empty.
    pub fn create(
        &mut self,
        name: &str,
        role: &str,
        skills_csv: &str,
        goal: &str,
    ) -> Result<&Profile> {
        let name = non_empty("name", name)?;
        let role = non_empty("current role", role)?;
        let goal = non_empty("career goal", goal)?;

        let profile = Profile::new(name, role, parse_skills(skills_csv), goal);
        self.store.save(&profile)?;
        tracing::info!(name = %profile.name, "created profile");
        Ok(&*self.active.insert(profile))
    }

    /// Load a profile by name and make it the active profile. On failure the
    /// previously active profile is left unchanged.
    pub fn load(&mut self, name: &str) -> Result<&Profile> {
        let profile = self.store.load(name)?;
        tracing::info!(%name, "loaded profile");
        Ok(&*self.active.insert(profile))
    }

    /// Append a skill to the active profile's completed sequence and persist
    /// the updated record (full overwrite, no separate update call). No
    /// dedup: the same skill can be recorded any number of times.
    pub fn mark_completed(&mut self, skill: &str) -> Result<()> {
        let profile = self.active.as_mut().ok_or(SkillForgeError::NoActiveProfile)?;
        let skill = non_empty("skill", skill)?;
        profile.mark_completed(skill);
        self.store.save(profile)
    }

    /// Build the prompt for the active profile and request a roadmap.
    /// Neither the active profile nor the store is touched, success or fail.
    pub fn generate_roadmap(&self, mode: RoadmapMode) -> Result<String> {
        let profile = self.active.as_ref().ok_or(SkillForgeError::NoActiveProfile)?;
        let prompt = build_prompt(profile, mode);
        tracing::info!(name = %profile.name, %mode, "requesting roadmap");
        self.roadmap.generate(&prompt)
    }

    /// Immutable snapshot of the active profile for display.
    pub fn view(&self) -> Result<&Profile> {
        self.active.as_ref().ok_or(SkillForgeError::NoActiveProfile)
    }
}

fn non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SkillForgeError::Validation(format!(
            "{field} must not be empty"
        )));
    }
    Ok(trimmed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::{Arc, Mutex};

    /// Test double that records every prompt it is asked to generate for.
    /// A `None` reply simulates an endpoint failure.
    #[derive(Clone)]
    struct StubRoadmap {
        prompts: Arc<Mutex<Vec<String>>>,
        reply: Option<String>,
    }

    impl StubRoadmap {
        fn replying(text: &str) -> Self {
            Self {
                prompts: Arc::new(Mutex::new(Vec::new())),
                reply: Some(text.to_string()),
            }
        }

        fn failing() -> Self {
            Self {
                prompts: Arc::new(Mutex::new(Vec::new())),
                reply: None,
            }
        }

        fn last_prompt(&self) -> Option<String> {
            self.prompts.lock().unwrap().last().cloned()
        }
    }

    impl RoadmapClient for StubRoadmap {
        fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(SkillForgeError::RoadmapGeneration(
                    "quota exceeded".to_string(),
                )),
            }
        }
    }

    fn workflow(store: &MemoryStore, roadmap: &StubRoadmap) -> Workflow {
        Workflow::new(Box::new(store.clone()), Box::new(roadmap.clone()))
    }

    #[test]
    fn create_persists_and_round_trips() {
        let store = MemoryStore::new();
        let mut wf = workflow(&store, &StubRoadmap::replying("ok"));

        let created = wf
            .create("Ana", "QA Tester", "manual testing, test planning", "Become SDET")
            .unwrap()
            .clone();
        assert!(created.completed.is_empty());
        assert_eq!(created.skills, vec!["manual testing", "test planning"]);

        // A second session sharing the store sees identical field values.
        let mut other = workflow(&store, &StubRoadmap::replying("ok"));
        let loaded = other.load("Ana").unwrap();
        assert_eq!(*loaded, created);
    }

    #[test]
    fn create_trims_inputs() {
        let store = MemoryStore::new();
        let mut wf = workflow(&store, &StubRoadmap::replying("ok"));
        let created = wf.create("  Ana  ", " QA ", "x", " SDET ").unwrap();
        assert_eq!(created.name, "Ana");
        assert_eq!(created.current_role, "QA");
        assert_eq!(created.goal, "SDET");
    }

    #[test]
    fn create_empty_name_fails_without_store_write() {
        let store = MemoryStore::new();
        let mut wf = workflow(&store, &StubRoadmap::replying("ok"));

        let err = wf.create("", "Dev", "x,y", "Goal").unwrap_err();
        assert!(matches!(err, SkillForgeError::Validation(_)));
        assert!(store.is_empty());
        assert!(wf.view().is_err());
    }

    #[test]
    fn create_empty_role_and_goal_fail() {
        let store = MemoryStore::new();
        let mut wf = workflow(&store, &StubRoadmap::replying("ok"));
        assert!(wf.create("Ana", "  ", "x", "Goal").is_err());
        assert!(wf.create("Ana", "Dev", "x", "\t").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn load_unknown_leaves_active_unchanged() {
        let store = MemoryStore::new();
        let mut wf = workflow(&store, &StubRoadmap::replying("ok"));
        wf.create("Ana", "QA Tester", "manual testing", "Become SDET")
            .unwrap();

        let err = wf.load("nonexistent-key").unwrap_err();
        assert!(matches!(err, SkillForgeError::ProfileNotFound(_)));
        assert_eq!(wf.view().unwrap().name, "Ana");
    }

    #[test]
    fn mark_completed_appends_without_dedup_and_persists() {
        let store = MemoryStore::new();
        let mut wf = workflow(&store, &StubRoadmap::replying("ok"));
        wf.create("Ana", "QA", "x", "SDET").unwrap();

        wf.mark_completed("SQL").unwrap();
        wf.mark_completed("SQL").unwrap();

        assert_eq!(wf.view().unwrap().completed, vec!["SQL", "SQL"]);
        // Each mutation was immediately persisted.
        assert_eq!(store.load("Ana").unwrap().completed, vec!["SQL", "SQL"]);
    }

    #[test]
    fn mark_completed_without_active_profile_writes_nothing() {
        let store = MemoryStore::new();
        let mut wf = workflow(&store, &StubRoadmap::replying("ok"));

        let err = wf.mark_completed("SQL").unwrap_err();
        assert!(matches!(err, SkillForgeError::NoActiveProfile));
        assert!(store.is_empty());
    }

    #[test]
    fn mark_completed_rejects_blank_skill() {
        let store = MemoryStore::new();
        let mut wf = workflow(&store, &StubRoadmap::replying("ok"));
        wf.create("Ana", "QA", "x", "SDET").unwrap();

        let err = wf.mark_completed("   ").unwrap_err();
        assert!(matches!(err, SkillForgeError::Validation(_)));
        assert!(wf.view().unwrap().completed.is_empty());
    }

    #[test]
    fn generate_roadmap_without_active_profile_fails() {
        let store = MemoryStore::new();
        let wf = workflow(&store, &StubRoadmap::replying("ok"));
        let err = wf.generate_roadmap(RoadmapMode::Full).unwrap_err();
        assert!(matches!(err, SkillForgeError::NoActiveProfile));
    }

    #[test]
    fn ana_end_to_end_incremental() {
        let store = MemoryStore::new();
        let roadmap = StubRoadmap::replying("- Learn pytest\n- Learn CI");
        let mut wf = workflow(&store, &roadmap);

        wf.create("Ana", "QA Tester", "manual testing", "Become SDET")
            .unwrap();
        wf.mark_completed("Python basics").unwrap();

        let text = wf.generate_roadmap(RoadmapMode::Incremental).unwrap();
        assert_eq!(text, "- Learn pytest\n- Learn CI");

        let prompt = roadmap.last_prompt().unwrap();
        for needle in [
            "Ana",
            "QA Tester",
            "manual testing",
            "Become SDET",
            "Python basics",
            "already completed",
        ] {
            assert!(prompt.contains(needle), "prompt missing {needle:?}");
        }

        // A later load sees the persisted completion.
        let mut other = workflow(&store, &StubRoadmap::replying("ok"));
        assert_eq!(other.load("Ana").unwrap().completed, vec!["Python basics"]);
    }

    #[test]
    fn generation_failure_alters_nothing() {
        let store = MemoryStore::new();
        let mut wf = workflow(&store, &StubRoadmap::failing());
        wf.create("Ana", "QA Tester", "manual testing", "Become SDET")
            .unwrap();

        let err = wf.generate_roadmap(RoadmapMode::Full).unwrap_err();
        assert!(matches!(err, SkillForgeError::RoadmapGeneration(_)));
        assert!(err.to_string().contains("quota exceeded"));

        // Active profile and store state are untouched; the session continues.
        assert_eq!(wf.view().unwrap().name, "Ana");
        assert!(store.load("Ana").unwrap().completed.is_empty());
        wf.mark_completed("SQL").unwrap();
        assert_eq!(wf.view().unwrap().completed, vec!["SQL"]);
    }
}
