//! Profile loading: parses the profile JSON once at startup and validates it.
//!
//! With no `PROFILE_PATH` configured, the profile bundled into the binary is used.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::profile::models::ProfileData;
use crate::profile::validation::{validate_profile, ProfileIssue};

/// Profile shipped with the binary.
pub const BUNDLED_PROFILE: &str = include_str!("../../data/profile.json");

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse profile from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Profile is invalid: {}", format_issues(.0))]
    Invalid(Vec<ProfileIssue>),
}

fn format_issues(issues: &[ProfileIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Loads the profile from `path`, or the bundled profile when `path` is `None`.
pub async fn load_profile(path: Option<&Path>) -> Result<ProfileData, ProfileError> {
    let (raw, origin) = match path {
        Some(p) => {
            let raw = tokio::fs::read_to_string(p)
                .await
                .map_err(|source| ProfileError::Io {
                    path: p.to_path_buf(),
                    source,
                })?;
            (raw, p.display().to_string())
        }
        None => (BUNDLED_PROFILE.to_string(), "bundled profile".to_string()),
    };

    let profile = parse_profile(&raw, &origin)?;
    info!(
        "Loaded profile '{}' from {origin} ({} skill categories, {} experience entries, {} projects)",
        profile.name,
        profile.skills.len(),
        profile.experience.len(),
        profile.projects.len()
    );
    Ok(profile)
}

/// Parses and validates profile JSON. Warnings are logged; errors reject the profile.
pub fn parse_profile(raw: &str, origin: &str) -> Result<ProfileData, ProfileError> {
    let profile: ProfileData =
        serde_json::from_str(raw).map_err(|source| ProfileError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    let (errors, warnings): (Vec<_>, Vec<_>) = validate_profile(&profile)
        .into_iter()
        .partition(ProfileIssue::is_error);

    for w in &warnings {
        warn!(field = %w.field, "Profile warning: {}", w.message);
    }

    if !errors.is_empty() {
        return Err(ProfileError::Invalid(errors));
    }

    Ok(profile)
}
