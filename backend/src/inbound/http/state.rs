//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle via `actix_web::web::Data`, keeping the store
//! dependency-injected rather than global and making handler tests trivial to
//! wire with a fresh store.

use std::sync::Arc;

use crate::domain::Store;
use crate::domain::catalogue::PresentationStubs;

/// Dependency bundle for HTTP handlers.
#[derive(Debug, Clone, Default)]
pub struct HttpState {
    /// The single in-memory store behind all mutable endpoints.
    pub store: Arc<Store>,
    /// Static dashboard presentation configuration.
    pub presentation: PresentationStubs,
}

impl HttpState {
    /// Construct state with an empty store and default presentation stubs.
    pub fn new() -> Self {
        Self::default()
    }
}
