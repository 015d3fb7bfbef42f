use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The generator is held as a trait object so tests can drive the pipelines
/// with scripted fakes. Both fields are read-only from the pipeline's
/// perspective; requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
