use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::SessionVerifier;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// `None` when no API key is configured; every AI-backed action then serves fallback data.
    pub llm: Option<Arc<dyn TextGenerator>>,
    pub sessions: Arc<dyn SessionVerifier>,
}

impl AppState {
    pub fn llm(&self) -> Option<&dyn TextGenerator> {
        self.llm.as_deref()
    }
}
