use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::DescriptionEnhancer;
use crate::store::SharedStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    /// Pluggable enhancer. Default: `GeminiClient`; tests swap in stubs.
    pub enhancer: Arc<dyn DescriptionEnhancer>,
    pub config: Config,
}
