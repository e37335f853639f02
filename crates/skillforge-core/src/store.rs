use crate::error::{Result, SkillForgeError};
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ---------------------------------------------------------------------------
// ProfileStore
// ---------------------------------------------------------------------------

/// Keyed document collection of profiles, keyed by `profile.name`.
///
/// `save` unconditionally overwrites the full record at the key. `load`
/// returns [`SkillForgeError::ProfileNotFound`] for an absent key; a
/// present-but-partial document is returned with missing fields defaulted.
/// Every call may be a network round trip — there is no retry or backoff,
/// transient failures surface to the caller as [`SkillForgeError::Store`].
pub trait ProfileStore {
    fn save(&self, profile: &Profile) -> Result<()>;
    fn load(&self, name: &str) -> Result<Profile>;
}

// ---------------------------------------------------------------------------
// Firestore wire format
// ---------------------------------------------------------------------------

/// Firestore REST documents carry typed values: strings as
/// `{"stringValue": ...}` and sequences as `{"arrayValue": {"values": [...]}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FirestoreValue {
    #[serde(rename = "stringValue", skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
    #[serde(rename = "arrayValue", skip_serializing_if = "Option::is_none")]
    array_value: Option<ArrayValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ArrayValue {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    values: Vec<FirestoreValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: HashMap<String, FirestoreValue>,
}

impl FirestoreValue {
    fn string(s: &str) -> Self {
        Self {
            string_value: Some(s.to_string()),
            array_value: None,
        }
    }

    fn array(items: &[String]) -> Self {
        Self {
            string_value: None,
            array_value: Some(ArrayValue {
                values: items.iter().map(|s| FirestoreValue::string(s)).collect(),
            }),
        }
    }

    fn as_string(&self) -> String {
        self.string_value.clone().unwrap_or_default()
    }

    fn as_strings(&self) -> Vec<String> {
        self.array_value
            .as_ref()
            .map(|a| a.values.iter().map(FirestoreValue::as_string).collect())
            .unwrap_or_default()
    }
}

impl FirestoreDocument {
    fn from_profile(profile: &Profile) -> Self {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), FirestoreValue::string(&profile.name));
        fields.insert(
            "current_role".to_string(),
            FirestoreValue::string(&profile.current_role),
        );
        fields.insert("skills".to_string(), FirestoreValue::array(&profile.skills));
        fields.insert("goal".to_string(), FirestoreValue::string(&profile.goal));
        fields.insert(
            "completed".to_string(),
            FirestoreValue::array(&profile.completed),
        );
        Self { fields }
    }

    /// Missing fields default — the store does not distinguish a malformed
    /// document from a sparse one.
    fn into_profile(self) -> Profile {
        let field = |name: &str| self.fields.get(name);
        Profile {
            name: field("name").map(FirestoreValue::as_string).unwrap_or_default(),
            current_role: field("current_role")
                .map(FirestoreValue::as_string)
                .unwrap_or_default(),
            skills: field("skills")
                .map(FirestoreValue::as_strings)
                .unwrap_or_default(),
            goal: field("goal").map(FirestoreValue::as_string).unwrap_or_default(),
            completed: field("completed")
                .map(FirestoreValue::as_strings)
                .unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// FirestoreStore
// ---------------------------------------------------------------------------

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const COLLECTION: &str = "users";

/// Production store adapter over the Firestore REST API.
pub struct FirestoreStore {
    client: reqwest::blocking::Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl FirestoreStore {
    pub fn new(project_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_base_url(project_id, api_key, FIRESTORE_BASE_URL)
    }

    /// Point the adapter at a non-default endpoint. Used by tests.
    pub fn with_base_url(
        project_id: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            project_id: project_id.into(),
            api_key: api_key.into(),
        }
    }

    /// URL of the document keyed by `name`. Each path segment is
    /// percent-encoded, so a name containing `?`, `#`, or `/` still
    /// addresses its own document instead of a truncated key.
    fn document_url(&self, name: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| SkillForgeError::Store(format!("invalid base url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| SkillForgeError::Store("base url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend([
                "projects",
                self.project_id.as_str(),
                "databases",
                "(default)",
                "documents",
                COLLECTION,
                name,
            ]);
        Ok(url)
    }
}

impl ProfileStore for FirestoreStore {
    fn save(&self, profile: &Profile) -> Result<()> {
        let doc = FirestoreDocument::from_profile(profile);
        tracing::debug!(name = %profile.name, "saving profile");

        // PATCH without an update mask replaces the whole document and
        // creates it when absent: last-write-wins, no merge.
        let response = self
            .client
            .patch(self.document_url(&profile.name)?)
            .query(&[("key", self.api_key.as_str())])
            .json(&doc)
            .send()
            .map_err(|e| SkillForgeError::Store(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SkillForgeError::Store(format!(
                "save of '{}' failed with status {}",
                profile.name,
                response.status()
            )));
        }
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Profile> {
        tracing::debug!(%name, "loading profile");
        let response = self
            .client
            .get(self.document_url(name)?)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .map_err(|e| SkillForgeError::Store(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SkillForgeError::ProfileNotFound(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(SkillForgeError::Store(format!(
                "load of '{}' failed with status {}",
                name,
                response.status()
            )));
        }

        let doc: FirestoreDocument = response
            .json()
            .map_err(|e| SkillForgeError::Store(e.to_string()))?;
        Ok(doc.into_profile())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store with the same overwrite semantics as Firestore. Clones
/// share the underlying map, so tests can keep a handle and inspect what a
/// workflow persisted. Also usable for offline runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profiles: Arc<Mutex<HashMap<String, Profile>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles. A poisoned lock still holds the map, so
    /// read through it rather than reporting the store as empty.
    pub fn len(&self) -> usize {
        match self.profiles.lock() {
            Ok(map) => map.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileStore for MemoryStore {
    fn save(&self, profile: &Profile) -> Result<()> {
        let mut map = self
            .profiles
            .lock()
            .map_err(|_| SkillForgeError::Store("memory store lock poisoned".to_string()))?;
        map.insert(profile.name.clone(), profile.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Profile> {
        let map = self
            .profiles
            .lock()
            .map_err(|_| SkillForgeError::Store("memory store lock poisoned".to_string()))?;
        map.get(name)
            .cloned()
            .ok_or_else(|| SkillForgeError::ProfileNotFound(name.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
