use std::sync::Arc;

use crate::chat::responder::Responder;
use crate::config::Config;
use crate::profile::models::ProfileData;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup; read-only afterwards, so no locking.
    pub profile: Arc<ProfileData>,
    /// Pluggable chat backend. Default: KeywordResponder.
    pub responder: Arc<dyn Responder>,
}
