use serde::{Deserialize, Serialize};

use crate::profile::models::ProfileData;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileIssue {
    pub field: String,
    pub message: String,
    pub severity: IssueSeverity,
}

impl ProfileIssue {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: IssueSeverity::Error,
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: IssueSeverity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

/// Checks a freshly loaded profile.
///
/// Errors block startup: blank name, role or visa status, blank skill
/// category labels or skill names, and experience entries without a company.
/// Warnings are logged only: empty skill categories, and no experience or
/// projects at all.
pub fn validate_profile(profile: &ProfileData) -> Vec<ProfileIssue> {
    let mut issues = Vec::new();

    for (field, value) in [
        ("name", &profile.name),
        ("role", &profile.role),
        ("visa_status", &profile.visa_status),
    ] {
        if is_blank(value) {
            issues.push(ProfileIssue::error(field, format!("{field} must not be empty")));
        }
    }

    for (i, category) in profile.skills.iter().enumerate() {
        if is_blank(&category.label) {
            issues.push(ProfileIssue::error(
                format!("skills[{i}].label"),
                "skill category label must not be empty",
            ));
        }
        if category.skills.is_empty() {
            issues.push(ProfileIssue::warning(
                format!("skills[{i}].skills"),
                format!("skill category '{}' has no skills", category.label),
            ));
        }
        for (j, skill) in category.skills.iter().enumerate() {
            if is_blank(skill) {
                issues.push(ProfileIssue::error(
                    format!("skills[{i}].skills[{j}]"),
                    "skill name must not be empty",
                ));
            }
        }
    }

    for (i, entry) in profile.experience.iter().enumerate() {
        if is_blank(&entry.company) {
            issues.push(ProfileIssue::error(
                format!("experience[{i}].company"),
                "experience company must not be empty",
            ));
        }
    }

    if profile.experience.is_empty() {
        issues.push(ProfileIssue::warning("experience", "no experience entries listed"));
    }
    if profile.projects.is_empty() {
        issues.push(ProfileIssue::warning("projects", "no projects listed"));
    }

    issues
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
