use axum::{extract::State, Json};

use crate::profile::models::{
    Certificate, ContactCard, EducationEntry, ExperienceEntry, ProfileData, ProjectEntry,
    SkillCategory,
};
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<ProfileData> {
    Json(state.profile.as_ref().clone())
}

/// GET /api/v1/profile/contact
pub async fn handle_get_contact(State(state): State<AppState>) -> Json<ContactCard> {
    Json(state.profile.contact())
}

/// GET /api/v1/skills
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<Vec<SkillCategory>> {
    Json(state.profile.skills.clone())
}

/// GET /api/v1/experience
pub async fn handle_get_experience(State(state): State<AppState>) -> Json<Vec<ExperienceEntry>> {
    Json(state.profile.experience.clone())
}

/// GET /api/v1/projects
pub async fn handle_get_projects(State(state): State<AppState>) -> Json<Vec<ProjectEntry>> {
    Json(state.profile.projects.clone())
}

/// GET /api/v1/education
pub async fn handle_get_education(State(state): State<AppState>) -> Json<Vec<EducationEntry>> {
    Json(state.profile.education.clone())
}

/// GET /api/v1/certificates
pub async fn handle_get_certificates(State(state): State<AppState>) -> Json<Vec<Certificate>> {
    Json(state.profile.certificates.clone())
}
