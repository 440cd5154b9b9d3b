use std::sync::Arc;

use crate::render::RenderedPage;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Rendered once at startup; every request is answered from this copy.
    pub page: Arc<RenderedPage>,
}

impl AppState {
    pub fn new(page: RenderedPage) -> Self {
        Self {
            page: Arc::new(page),
        }
    }
}
