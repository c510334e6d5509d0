//! Chat responder: pluggable, trait-based mapping from a free-text question to one answer.
//!
//! Default: `KeywordResponder` (ordered keyword rules, pure and deterministic).
//!
//! `AppState` holds an `Arc<dyn Responder>` so the backend can be swapped at startup
//! without touching handlers.

use serde::{Deserialize, Serialize};

use crate::chat::prompts::{FALLBACK_ANSWER, INTRO_TEMPLATE};
use crate::chat::rules::{first_match, normalize, Intent, IntentRule, INTENT_RULES};
use crate::profile::models::ProfileData;

/// An answer plus the intent that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub answer: String,
    pub intent: Intent,
}

/// Implement this to swap answer backends. Implementations must be total:
/// every question, including the empty string, gets a non-empty answer.
pub trait Responder: Send + Sync {
    fn reply(&self, question: &str, profile: &ProfileData) -> Reply;
}

/// Rule-table responder. Stateless; the only input besides the question is the
/// read-only profile.
pub struct KeywordResponder {
    rules: &'static [IntentRule],
}

impl KeywordResponder {
    pub fn new() -> Self {
        Self {
            rules: INTENT_RULES,
        }
    }

    #[allow(dead_code)]
    pub fn with_rules(rules: &'static [IntentRule]) -> Self {
        Self { rules }
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder for KeywordResponder {
    fn reply(&self, question: &str, profile: &ProfileData) -> Reply {
        let normalized = normalize(question);
        match first_match(self.rules, &normalized) {
            Some(rule) => Reply {
                answer: (rule.answer)(profile),
                intent: rule.intent,
            },
            None => Reply {
                answer: FALLBACK_ANSWER.to_string(),
                intent: Intent::Fallback,
            },
        }
    }
}

/// Answers `question` with the default keyword rules.
#[allow(dead_code)]
pub fn respond(question: &str, profile: &ProfileData) -> String {
    KeywordResponder::new().reply(question, profile).answer
}

/// Assistant greeting for the chat panel.
pub fn intro(profile: &ProfileData) -> String {
    INTRO_TEMPLATE
        .replace("{assistant}", &profile.assistant_name)
        .replace("{name}", &profile.name)
        .replace("{first_name}", profile.first_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::prompts::{PROJECT_HIGHLIGHT, SKILLS_PREFIX};
    use crate::profile::loader::{parse_profile, BUNDLED_PROFILE};
    use crate::profile::models::ProjectEntry;
    use crate::profile::test_support::sample_profile;

    #[test]
    fn test_skills_answer_lists_every_skill_once_in_order() {
        let profile = sample_profile();
        let answer = respond("What skills do you have?", &profile);
        assert_eq!(answer, "Key skills: Rust, Go, PostgreSQL, Redis");
        for skill in profile.all_skills() {
            assert_eq!(answer.matches(skill).count(), 1, "{skill} should appear once");
        }
    }

    #[test]
    fn test_skills_is_case_insensitive() {
        let profile = sample_profile();
        assert_eq!(respond("SKILLS?", &profile), respond("skills?", &profile));
        assert!(respond("SKILLS?", &profile).starts_with(SKILLS_PREFIX));
    }

    #[test]
    fn test_priority_skills_before_projects() {
        let profile = sample_profile();
        let reply = KeywordResponder::new().reply("tell me about your skills and projects", &profile);
        assert_eq!(reply.intent, Intent::Skills);
        assert!(reply.answer.starts_with(SKILLS_PREFIX));
    }

    #[test]
    fn test_experience_answer_reports_entry_count() {
        let profile = sample_profile();
        assert_eq!(
            respond("Tell me about your experience", &profile),
            "I have 2 professional role(s) listed, with impact in ML, SQL, and automation."
        );
        assert!(respond("where did you WORK", &profile).contains('2'));
    }

    #[test]
    fn test_project_answer_ignores_project_data() {
        let mut profile = sample_profile();
        let before = respond("any projects?", &profile);
        profile.projects.push(ProjectEntry {
            name: "Other".to_string(),
            description: String::new(),
            tech: vec![],
            link: None,
            image: None,
        });
        assert_eq!(before, PROJECT_HIGHLIGHT);
        assert_eq!(respond("any projects?", &profile), PROJECT_HIGHLIGHT);
    }

    #[test]
    fn test_visa_answer_is_profile_status_verbatim() {
        let profile = sample_profile();
        let reply = KeywordResponder::new().reply("Will you need sponsorship?", &profile);
        assert_eq!(reply.intent, Intent::Visa);
        assert_eq!(reply.answer, profile.visa_status);
    }

    #[test]
    fn test_fallback_for_empty_and_unmatched() {
        let profile = sample_profile();
        for q in ["", "hello there", "What are your goals?"] {
            let reply = KeywordResponder::new().reply(q, &profile);
            assert_eq!(reply.intent, Intent::Fallback);
            assert_eq!(reply.answer, FALLBACK_ANSWER);
        }
    }

    #[test]
    fn test_answers_are_never_empty() {
        let profile = sample_profile();
        for q in ["", "skills", "work", "project", "visa", "???"] {
            assert!(!respond(q, &profile).is_empty(), "empty answer for {q:?}");
        }
    }

    #[test]
    fn test_bundled_profile_answers() {
        let profile = parse_profile(BUNDLED_PROFILE, "bundled").unwrap();
        assert_eq!(
            respond("visa?", &profile),
            "Currently on an F-1 visa, eligible to work on OPT, and seeking sponsorship after 3 years."
        );
        assert_eq!(
            respond("experience", &profile),
            "I have 1 professional role(s) listed, with impact in ML, SQL, and automation."
        );
        let skills = respond("skills", &profile);
        assert!(skills.starts_with("Key skills: Python, Java, C++, C, NumPy"));
        assert!(skills.ends_with("VS Code, PyCharm"));
    }

    #[test]
    fn test_custom_rule_table() {
        static ONLY_VISA: &[IntentRule] = &[IntentRule {
            intent: Intent::Visa,
            keywords: &["visa"],
            answer: |p| p.visa_status.clone(),
        }];
        let profile = sample_profile();
        let responder = KeywordResponder::with_rules(ONLY_VISA);
        assert_eq!(responder.reply("skills", &profile).intent, Intent::Fallback);
        assert_eq!(responder.reply("visa", &profile).intent, Intent::Visa);
    }

    #[test]
    fn test_intro_names_assistant_and_owner() {
        let profile = sample_profile();
        assert_eq!(
            intro(&profile),
            "Hi! I'm Babbage, Ada Lovelace's AI assistant. Ask me anything about Ada's skills, \
             experience, projects, qualifications or visa status! 🚀"
        );
    }
}
