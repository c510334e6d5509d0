pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assets::handlers as assets;
use crate::chat::handlers as chat;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile content
        .route("/api/v1/profile", get(profile::handle_get_profile))
        .route("/api/v1/profile/contact", get(profile::handle_get_contact))
        .route("/api/v1/profile/photo", get(assets::handle_photo))
        .route("/api/v1/skills", get(profile::handle_get_skills))
        .route("/api/v1/experience", get(profile::handle_get_experience))
        .route("/api/v1/projects", get(profile::handle_get_projects))
        .route(
            "/api/v1/projects/:index/image",
            get(assets::handle_project_image),
        )
        .route("/api/v1/education", get(profile::handle_get_education))
        .route("/api/v1/certificates", get(profile::handle_get_certificates))
        .route("/api/v1/resume", get(assets::handle_resume))
        // Chat assistant
        .route("/api/v1/chat", post(chat::handle_chat))
        .route("/api/v1/chat/intro", get(chat::handle_intro))
        .with_state(state)
}
