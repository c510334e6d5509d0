//! Intent rules: the ordered (predicate, answer) table behind the chat responder.
//!
//! Rules are evaluated top to bottom against the lower-cased question and the
//! first rule whose keywords match wins. Order is the priority: a question
//! mentioning both "skills" and "projects" gets the skills answer. Note that
//! "work authorization" contains "work", so it is answered by the experience
//! rule before the visa rule is ever consulted.
//!
//! Adding a rule means adding a row to `INTENT_RULES`, not a new branch.

use serde::{Deserialize, Serialize};

use crate::chat::prompts::{EXPERIENCE_IMPACT, PROJECT_HIGHLIGHT, SKILLS_PREFIX};
use crate::profile::models::ProfileData;

/// Which canned answer a question resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Skills,
    Experience,
    Projects,
    Visa,
    Fallback,
}

/// One row of the rule table.
pub struct IntentRule {
    pub intent: Intent,
    /// Matches when the normalized question contains any of these substrings.
    pub keywords: &'static [&'static str],
    pub answer: fn(&ProfileData) -> String,
}

impl IntentRule {
    /// `normalized` must already be lower-cased.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|kw| normalized.contains(kw))
    }
}

pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Skills,
        keywords: &["skills"],
        answer: skills_answer,
    },
    IntentRule {
        intent: Intent::Experience,
        keywords: &["experience", "work"],
        answer: experience_answer,
    },
    IntentRule {
        intent: Intent::Projects,
        keywords: &["project"],
        answer: project_answer,
    },
    IntentRule {
        intent: Intent::Visa,
        keywords: &["visa", "work authorization", "sponsorship"],
        answer: visa_answer,
    },
];

/// Lower-cases the question. No trimming or other cleanup is applied.
pub fn normalize(question: &str) -> String {
    question.to_lowercase()
}

/// First rule matching the already-normalized question, if any.
pub fn first_match<'a>(rules: &'a [IntentRule], normalized: &str) -> Option<&'a IntentRule> {
    rules.iter().find(|r| r.matches(normalized))
}

fn skills_answer(profile: &ProfileData) -> String {
    format!("{SKILLS_PREFIX}{}", profile.all_skills().join(", "))
}

fn experience_answer(profile: &ProfileData) -> String {
    format!(
        "I have {} professional role(s) listed, {EXPERIENCE_IMPACT}",
        profile.experience.len()
    )
}

fn project_answer(_profile: &ProfileData) -> String {
    PROJECT_HIGHLIGHT.to_string()
}

fn visa_answer(profile: &ProfileData) -> String {
    profile.visa_status.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_for(question: &str) -> Option<Intent> {
        first_match(INTENT_RULES, &normalize(question)).map(|r| r.intent)
    }

    #[test]
    fn test_rule_order_is_skills_experience_projects_visa() {
        let order: Vec<Intent> = INTENT_RULES.iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![Intent::Skills, Intent::Experience, Intent::Projects, Intent::Visa]
        );
    }

    #[test]
    fn test_skills_beats_project() {
        assert_eq!(
            intent_for("tell me about your skills and projects"),
            Some(Intent::Skills)
        );
    }

    #[test]
    fn test_experience_beats_project() {
        assert_eq!(
            intent_for("what project work have you done?"),
            Some(Intent::Experience)
        );
    }

    #[test]
    fn test_work_authorization_hits_experience_rule_first() {
        assert_eq!(
            intent_for("Do you have work authorization?"),
            Some(Intent::Experience)
        );
    }

    #[test]
    fn test_visa_and_sponsorship_keywords() {
        assert_eq!(intent_for("What is your VISA status"), Some(Intent::Visa));
        assert_eq!(intent_for("need sponsorship?"), Some(Intent::Visa));
    }

    #[test]
    fn test_matching_is_substring_based() {
        // "projects" contains "project"; "homework" contains "work"
        assert_eq!(intent_for("projects"), Some(Intent::Projects));
        assert_eq!(intent_for("homework"), Some(Intent::Experience));
        // "skill" alone does not contain "skills"
        assert_eq!(intent_for("best skill?"), None);
    }

    #[test]
    fn test_no_match_for_empty_question() {
        assert_eq!(intent_for(""), None);
    }

    #[test]
    fn test_normalize_only_lowercases() {
        assert_eq!(normalize("  SKILLS?  "), "  skills?  ");
    }
}
