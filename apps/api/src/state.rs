use std::sync::Arc;

use crate::config::Config;
use crate::search::matcher::JobMatcher;
use crate::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: JobStore,
    /// Kept for handlers that need runtime settings; only `main` reads it today.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable match evaluator. Default: KeywordMatcher.
    pub matcher: Arc<dyn JobMatcher>,
}
