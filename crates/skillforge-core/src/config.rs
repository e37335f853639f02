use crate::error::{Result, SkillForgeError};

/// Model targeted when `GEMINI_MODEL` is unset.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Process-scoped configuration, loaded once at startup and passed explicitly
/// to the store and roadmap clients. A missing required variable is the one
/// unrecoverable failure in the system: callers must abort startup on it.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub firestore_project_id: String,
    pub firestore_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| SkillForgeError::MissingConfig(key.to_string()))
        };

        Ok(Self {
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_model: lookup("GEMINI_MODEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            firestore_project_id: required("FIRESTORE_PROJECT_ID")?,
            firestore_api_key: required("FIRESTORE_API_KEY")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn loads_with_all_required_vars() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "g-key"),
            ("FIRESTORE_PROJECT_ID", "proj"),
            ("FIRESTORE_API_KEY", "f-key"),
        ]))
        .unwrap();
        assert_eq!(cfg.gemini_api_key, "g-key");
        assert_eq!(cfg.gemini_model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn model_override_respected() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "g-key"),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
            ("FIRESTORE_PROJECT_ID", "proj"),
            ("FIRESTORE_API_KEY", "f-key"),
        ]))
        .unwrap();
        assert_eq!(cfg.gemini_model, "gemini-1.5-flash");
    }

    #[test]
    fn missing_api_key_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[
            ("FIRESTORE_PROJECT_ID", "proj"),
            ("FIRESTORE_API_KEY", "f-key"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "  "),
            ("FIRESTORE_PROJECT_ID", "proj"),
            ("FIRESTORE_API_KEY", "f-key"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SkillForgeError::MissingConfig(_)));
    }
}
