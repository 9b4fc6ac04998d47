//! Composite artifact keys.
//!
//! Each collection in the artifact store is keyed by an immutable value type
//! combining the caller-supplied identifiers, with structural equality and
//! hashing so the keys can be used directly in a map.

use std::fmt;

use crate::ids::{PlotId, SessionId, SnapshotId};

/// Key for the snapshot and query/response collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey {
    pub session: SessionId,
    pub snapshot: SnapshotId,
}

impl SnapshotKey {
    pub fn new(session: impl Into<SessionId>, snapshot: impl Into<SnapshotId>) -> Self {
        Self {
            session: session.into(),
            snapshot: snapshot.into(),
        }
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.session, self.snapshot)
    }
}

/// Key for the plot collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlotKey {
    pub session: SessionId,
    pub snapshot: SnapshotId,
    pub plot: PlotId,
}

impl PlotKey {
    pub fn new(
        session: impl Into<SessionId>,
        snapshot: impl Into<SnapshotId>,
        plot: impl Into<PlotId>,
    ) -> Self {
        Self {
            session: session.into(),
            snapshot: snapshot.into(),
            plot: plot.into(),
        }
    }
}

impl fmt::Display for PlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.session, self.snapshot, self.plot)
    }
}
