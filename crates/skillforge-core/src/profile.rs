use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// One user's career state. `name` doubles as the store key; overwriting an
/// existing key replaces the whole record (last-write-wins).
///
/// Every field carries a serde default so a partial stored document still
/// deserializes — callers get empty strings/sequences for whatever is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub current_role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub completed: Vec<String>,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        current_role: impl Into<String>,
        skills: Vec<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            current_role: current_role.into(),
            skills,
            goal: goal.into(),
            completed: Vec::new(),
        }
    }

    /// Append a skill to the completed sequence. Append-only, no dedup:
    /// marking the same skill twice records it twice.
    pub fn mark_completed(&mut self, skill: impl Into<String>) {
        self.completed.push(skill.into());
    }
}

/// Split a comma-separated skill list, trimming each entry and dropping
/// empty/whitespace-only ones. Insertion order and duplicates are preserved.
pub fn parse_skills(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
