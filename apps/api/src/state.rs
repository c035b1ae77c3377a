use std::sync::Arc;

use crate::api_client::DocumentSource;
use crate::layout::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Remote legal API. Default: `LegalApiClient`; tests use an in-memory source.
    pub source: Arc<dyn DocumentSource>,
    /// Page geometry and report font used by every export.
    pub page_config: PageConfig,
}
