//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    memory::InMemoryArtifactStore,
    ports::{ArtifactStore, ResponderPort},
    responder::MockResponder,
};

/// Main application state.
///
/// Holds the artifact store and the response generator behind their port
/// traits. Passed to HTTP handlers via Axum state.
pub struct App {
    pub store: Arc<dyn ArtifactStore>,
    pub responder: Arc<dyn ResponderPort>,
}

impl App {
    pub fn new(store: Arc<dyn ArtifactStore>, responder: Arc<dyn ResponderPort>) -> Self {
        Self { store, responder }
    }

    /// Default production wiring: in-memory store, stub responder.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryArtifactStore::new()),
            Arc::new(MockResponder::new()),
        )
    }
}
