// Error variants reserved for non-stub implementations
#![allow(dead_code)]

//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Ports exist for:
//! - Artifact storage (could swap in-memory -> Postgres/Redis)
//! - Response generation (could swap the stub -> a real inference client)

use async_trait::async_trait;

use shinybridge_domain::{Plot, PlotKey, QueryResponse, Snapshot, SnapshotKey};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing store failure. The in-memory store never produces this; it
    /// exists for persistent implementations.
    #[error("Store backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ResponderError {
    #[error("Response generation failed: {0}")]
    Failed(String),
}

// =============================================================================
// Artifact Store Port
// =============================================================================

/// Entry counts per collection, as reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub snapshots: usize,
    pub plots: usize,
    pub responses: usize,
}

/// Keyed registry for session-scoped analysis artifacts.
///
/// Three independent collections: snapshots, plots, and query/response
/// records. Writes fully replace any record under the same key (no merge,
/// no deletion); no referential integrity is enforced across collections.
/// Implementations must make each write atomic with respect to interleaved
/// reads and writes on the same key.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Store or overwrite the snapshot under `key`.
    async fn put_snapshot(&self, key: SnapshotKey, snapshot: Snapshot) -> Result<(), StoreError>;

    /// Store or overwrite the plot under `key`.
    async fn put_plot(&self, key: PlotKey, plot: Plot) -> Result<(), StoreError>;

    /// Store or overwrite the query/response record under `key`.
    async fn put_response(&self, key: SnapshotKey, record: QueryResponse)
        -> Result<(), StoreError>;

    /// Point lookup of a query/response record. `None` means the key was
    /// never written.
    async fn get_response(&self, key: &SnapshotKey) -> Result<Option<QueryResponse>, StoreError>;

    /// Current entry count in each collection. Purely observational.
    async fn counts(&self) -> Result<StoreCounts, StoreError>;
}

// =============================================================================
// Responder Port
// =============================================================================

/// Produces a response for an analysis query.
///
/// The shipped implementation is a deterministic stub; a real inference
/// client slots in behind this trait without touching the store contract.
#[async_trait]
pub trait ResponderPort: Send + Sync {
    async fn answer(&self, query: &str) -> Result<String, ResponderError>;
}
