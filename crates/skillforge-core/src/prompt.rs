use crate::error::SkillForgeError;
use crate::profile::Profile;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// RoadmapMode
// ---------------------------------------------------------------------------

/// Which prompt policy to use when generating a roadmap.
///
/// `Full` regenerates a complete staged roadmap from scratch; `Incremental`
/// folds the completed skills in and asks only for the steps after them.
/// Both are legitimate policies — the front-ends pick, the builder doesn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapMode {
    Full,
    Incremental,
}

impl fmt::Display for RoadmapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadmapMode::Full => write!(f, "full"),
            RoadmapMode::Incremental => write!(f, "incremental"),
        }
    }
}

impl FromStr for RoadmapMode {
    type Err = SkillForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(RoadmapMode::Full),
            "incremental" => Ok(RoadmapMode::Incremental),
            other => Err(SkillForgeError::InvalidMode(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Prompt builder
// ---------------------------------------------------------------------------

/// Map a profile to the prompt sent to the text-generation endpoint.
///
/// Pure and deterministic: the same profile and mode always yield the same
/// string. Field contents are interpolated verbatim — no escaping, no length
/// limit, no validation.
pub fn build_prompt(profile: &Profile, mode: RoadmapMode) -> String {
    match mode {
        RoadmapMode::Full => full_prompt(profile),
        RoadmapMode::Incremental => incremental_prompt(profile),
    }
}

fn full_prompt(p: &Profile) -> String {
    format!(
        "You are an AI career mentor. Create a clear, step-by-step learning roadmap \
         for this user based on their details:\n\n\
         Name: {}\n\
         Current Role: {}\n\
         Existing Skills: {}\n\
         Career Goal: {}\n\n\
         Provide:\n\
         - Learning stages (Beginner, Intermediate, Advanced)\n\
         - Specific skill recommendations\n\
         - Suggested courses or certifications\n\
         - Final project ideas\n\n\
         Format neatly with bullet points.",
        p.name,
        p.current_role,
        p.skills.join(", "),
        p.goal
    )
}

fn incremental_prompt(p: &Profile) -> String {
    // The completed clause is omitted entirely when nothing is completed.
    let completed_clause = if p.completed.is_empty() {
        String::new()
    } else {
        format!(
            "The user has already completed these skills: {}. ",
            p.completed.join(", ")
        )
    };

    format!(
        "You are an AI career mentor. {}Create a personalized, step-by-step *updated* \
         career roadmap for {}, who is currently working as a {} with skills in {}, \
         aiming to become a {}. Consider their completed skills and recommend the \
         *next logical learning steps*, including courses, certifications, projects, \
         and soft skills to develop. Only show what comes *after* the completed skills. \
         Format it as clear bullet points or stages.",
        completed_clause,
        p.name,
        p.current_role,
        p.skills.join(", "),
        p.goal
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Profile {
        Profile::new(
            "Ana",
            "QA Tester",
            vec!["manual testing".into(), "test planning".into()],
            "Become SDET",
        )
    }

    #[test]
    fn mode_round_trips_through_strings() {
        for mode in [RoadmapMode::Full, RoadmapMode::Incremental] {
            assert_eq!(mode.to_string().parse::<RoadmapMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = "complete".parse::<RoadmapMode>().unwrap_err();
        assert!(matches!(err, SkillForgeError::InvalidMode(_)));
    }

    #[test]
    fn full_prompt_contains_every_field_verbatim() {
        let prompt = build_prompt(&ana(), RoadmapMode::Full);
        assert!(prompt.contains("Ana"));
        assert!(prompt.contains("QA Tester"));
        assert!(prompt.contains("manual testing"));
        assert!(prompt.contains("test planning"));
        assert!(prompt.contains("Become SDET"));
        assert!(prompt.contains("Beginner, Intermediate, Advanced"));
    }

    #[test]
    fn incremental_prompt_omits_clause_when_nothing_completed() {
        let prompt = build_prompt(&ana(), RoadmapMode::Incremental);
        assert!(!prompt.contains("already completed"));
        assert!(prompt.contains("Ana"));
        assert!(prompt.contains("Become SDET"));
    }

    #[test]
    fn incremental_prompt_lists_completed_skills_verbatim() {
        let mut p = ana();
        p.mark_completed("Python basics");
        p.mark_completed("SQL");
        let prompt = build_prompt(&p, RoadmapMode::Incremental);
        assert!(prompt.contains("The user has already completed these skills: Python basics, SQL."));
        assert!(prompt.contains("Python basics"));
        assert!(prompt.contains("SQL"));
    }

    #[test]
    fn builder_is_deterministic() {
        let mut p = ana();
        p.mark_completed("Python basics");
        let a = build_prompt(&p, RoadmapMode::Incremental);
        let b = build_prompt(&p, RoadmapMode::Incremental);
        assert_eq!(a, b);
    }

    #[test]
    fn no_escaping_of_field_contents() {
        let p = Profile::new("<Ana>", "Dev \"Ops\"", vec!["a,b".into()], "100% goal");
        let prompt = build_prompt(&p, RoadmapMode::Full);
        assert!(prompt.contains("<Ana>"));
        assert!(prompt.contains("Dev \"Ops\""));
        assert!(prompt.contains("100% goal"));
    }
}
