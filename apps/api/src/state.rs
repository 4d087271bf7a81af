use std::sync::Arc;

use crate::relay::QueryRelay;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<QueryRelay>,
}
