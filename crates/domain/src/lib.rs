//! ShinyBridge domain types.
//!
//! Pure data crate: identifier newtypes, composite artifact keys, and the
//! artifact records themselves. No I/O, no framework types.

pub mod artifacts;
pub mod ids;
pub mod keys;

pub use artifacts::{Plot, QueryResponse, Snapshot};
pub use ids::{PlotId, SessionId, SnapshotId};
pub use keys::{PlotKey, SnapshotKey};
