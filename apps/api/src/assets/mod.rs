//! Static asset loading (photo, resume PDF, project images).
//!
//! Missing assets degrade gracefully: the load yields a placeholder hint telling
//! the operator where to put the file, and every other endpoint keeps working.

pub mod handlers;

use std::path::{Component, Path};

use bytes::Bytes;
use tracing::warn;

/// Outcome of reading one asset from the assets directory.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetLoad {
    Found {
        bytes: Bytes,
        content_type: &'static str,
    },
    Missing {
        hint: String,
    },
}

/// What the asset is, used in the operator hint ("Place your {kind} at ...").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Photo,
    Resume,
    ProjectImage,
}

impl AssetKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Photo => "profile photo",
            AssetKind::Resume => "resume PDF",
            AssetKind::ProjectImage => "project image",
        }
    }
}

/// Reads `file` from `dir`. Any failure, including a file name that would
/// escape `dir`, yields `AssetLoad::Missing` rather than an error.
pub async fn load_asset(dir: &Path, file: &str, kind: AssetKind) -> AssetLoad {
    let path = dir.join(file);
    let hint = format!("Place your {} at {}", kind.label(), path.display());

    if !is_plain_file_name(file) {
        warn!(file = %file, "Rejected asset name outside the assets directory");
        return AssetLoad::Missing { hint };
    }

    match tokio::fs::read(&path).await {
        Ok(bytes) => AssetLoad::Found {
            bytes: Bytes::from(bytes),
            content_type: content_type_for(file),
        },
        Err(e) => {
            warn!(path = %path.display(), "Asset unavailable ({}): {e}", kind.label());
            AssetLoad::Missing { hint }
        }
    }
}

/// A single normal path component: no separators, no `..`, not absolute.
fn is_plain_file_name(file: &str) -> bool {
    let mut components = Path::new(file).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !file.contains(['/', '\\'])
}

/// Content type inferred from the file extension.
pub fn content_type_for(file: &str) -> &'static str {
    let ext = Path::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
