use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::assets::{load_asset, AssetKind, AssetLoad};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/resume
pub async fn handle_resume(State(state): State<AppState>) -> Result<Response, AppError> {
    let resume = &state.profile.resume;
    let load = load_asset(&state.config.assets_dir, &resume.file, AssetKind::Resume).await;

    let disposition = format!("attachment; filename=\"{}\"", resume.download_name);
    let disposition = HeaderValue::from_str(&disposition).map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "Invalid resume download name '{}': {e}",
            resume.download_name
        ))
    })?;

    let mut response = into_asset_response(load)?;
    response
        .headers_mut()
        .insert(header::CONTENT_DISPOSITION, disposition);
    Ok(response)
}

/// GET /api/v1/profile/photo
pub async fn handle_photo(State(state): State<AppState>) -> Result<Response, AppError> {
    let file = state.profile.photo.as_deref().ok_or_else(|| {
        AppError::AssetMissing("No profile photo is configured in the profile".to_string())
    })?;
    let load = load_asset(&state.config.assets_dir, file, AssetKind::Photo).await;
    into_asset_response(load)
}

/// GET /api/v1/projects/:index/image
pub async fn handle_project_image(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<Response, AppError> {
    let index: usize = index
        .parse()
        .map_err(|_| AppError::Validation(format!("Project index '{index}' is not a number")))?;

    let project = state
        .profile
        .projects
        .get(index)
        .ok_or_else(|| AppError::NotFound(format!("Project {index} not found")))?;

    let file = project.image.as_deref().ok_or_else(|| {
        AppError::AssetMissing(format!("No image is configured for project '{}'", project.name))
    })?;

    let load = load_asset(&state.config.assets_dir, file, AssetKind::ProjectImage).await;
    into_asset_response(load)
}

fn into_asset_response(load: AssetLoad) -> Result<Response, AppError> {
    match load {
        AssetLoad::Found {
            bytes,
            content_type,
        } => Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response()),
        AssetLoad::Missing { hint } => Err(AppError::AssetMissing(hint)),
    }
}
