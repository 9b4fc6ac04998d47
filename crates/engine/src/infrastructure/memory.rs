//! In-memory artifact store.
//!
//! Three independent concurrent maps, one per collection. `DashMap` insert
//! replaces the whole record under a lock on the key's shard, so readers
//! never observe a partially applied record and racing same-key writes
//! resolve to exactly one of the written records.

use async_trait::async_trait;
use dashmap::DashMap;

use shinybridge_domain::{Plot, PlotKey, QueryResponse, Snapshot, SnapshotKey};

use super::ports::{ArtifactStore, StoreCounts, StoreError};

/// Process-lifetime artifact store. Unbounded; entries are never evicted.
#[derive(Default)]
pub struct InMemoryArtifactStore {
    snapshots: DashMap<SnapshotKey, Snapshot>,
    plots: DashMap<PlotKey, Plot>,
    responses: DashMap<SnapshotKey, QueryResponse>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn put_snapshot(&self, key: SnapshotKey, snapshot: Snapshot) -> Result<(), StoreError> {
        self.snapshots.insert(key, snapshot);
        Ok(())
    }

    async fn put_plot(&self, key: PlotKey, plot: Plot) -> Result<(), StoreError> {
        self.plots.insert(key, plot);
        Ok(())
    }

    async fn put_response(
        &self,
        key: SnapshotKey,
        record: QueryResponse,
    ) -> Result<(), StoreError> {
        self.responses.insert(key, record);
        Ok(())
    }

    async fn get_response(&self, key: &SnapshotKey) -> Result<Option<QueryResponse>, StoreError> {
        Ok(self.responses.get(key).map(|entry| entry.value().clone()))
    }

    async fn counts(&self) -> Result<StoreCounts, StoreError> {
        Ok(StoreCounts {
            snapshots: self.snapshots.len(),
            plots: self.plots.len(),
            responses: self.responses.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn snapshot(marker: i64) -> Snapshot {
        let mut inputs = serde_json::Map::new();
        inputs.insert("marker".to_string(), marker.into());
        Snapshot {
            inputs,
            outputs: serde_json::Map::new(),
        }
    }

    fn plot(url: &str) -> Plot {
        Plot {
            plot_url: url.to_string(),
            caption: String::new(),
            description: String::new(),
            metadata: serde_json::Map::new(),
        }
    }

    #[tokio::test]
    async fn get_response_returns_none_for_missing() {
        let store = InMemoryArtifactStore::new();
        let found = store
            .get_response(&SnapshotKey::new("s1", "n1"))
            .await
            .expect("store");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn put_then_get_response_roundtrips() {
        let store = InMemoryArtifactStore::new();
        let key = SnapshotKey::new("s1", "n1");
        let record = QueryResponse {
            query: "why".to_string(),
            response: "because".to_string(),
        };
        store
            .put_response(key.clone(), record.clone())
            .await
            .expect("store");

        assert_eq!(store.get_response(&key).await.expect("store"), Some(record));
    }

    #[tokio::test]
    async fn writes_are_last_write_wins() {
        let store = InMemoryArtifactStore::new();
        let key = SnapshotKey::new("s1", "n1");
        store
            .put_snapshot(key.clone(), snapshot(1))
            .await
            .expect("store");
        store
            .put_snapshot(key.clone(), snapshot(2))
            .await
            .expect("store");

        // Overwrite must not double-count
        let counts = store.counts().await.expect("store");
        assert_eq!(counts.snapshots, 1);
        assert_eq!(
            store.snapshots.get(&key).map(|e| e.value().clone()),
            Some(snapshot(2))
        );
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let store = InMemoryArtifactStore::new();
        let key = SnapshotKey::new("s1", "n1");

        // A plot and a response may exist for a pair that was never snapshotted
        store
            .put_plot(PlotKey::new("s1", "n1", "p1"), plot("http://x/p.png"))
            .await
            .expect("store");
        store
            .put_response(
                key.clone(),
                QueryResponse {
                    query: "q".to_string(),
                    response: "r".to_string(),
                },
            )
            .await
            .expect("store");

        let counts = store.counts().await.expect("store");
        assert_eq!(counts.snapshots, 0);
        assert_eq!(counts.plots, 1);
        assert_eq!(counts.responses, 1);
    }

    #[tokio::test]
    async fn counts_track_each_collection() {
        let store = InMemoryArtifactStore::new();
        store
            .put_snapshot(SnapshotKey::new("s1", "n1"), snapshot(1))
            .await
            .expect("store");
        store
            .put_snapshot(SnapshotKey::new("s1", "n2"), snapshot(2))
            .await
            .expect("store");
        for plot_id in ["p1", "p2", "p3"] {
            store
                .put_plot(PlotKey::new("s1", "n1", plot_id), plot("http://x/p.png"))
                .await
                .expect("store");
        }
        store
            .put_response(
                SnapshotKey::new("s1", "n1"),
                QueryResponse {
                    query: "q".to_string(),
                    response: "r".to_string(),
                },
            )
            .await
            .expect("store");

        let counts = store.counts().await.expect("store");
        assert_eq!(
            counts,
            StoreCounts {
                snapshots: 2,
                plots: 3,
                responses: 1
            }
        );
    }

    #[tokio::test]
    async fn concurrent_writes_to_distinct_keys_do_not_interfere() {
        let store = Arc::new(InMemoryArtifactStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let key = SnapshotKey::new("s1", format!("n{i}"));
                store.put_snapshot(key, snapshot(i)).await
            }));
        }
        for handle in handles {
            handle.await.expect("join").expect("store");
        }

        assert_eq!(store.counts().await.expect("store").snapshots, 32);
        for i in 0..32 {
            let key = SnapshotKey::new("s1", format!("n{i}"));
            assert_eq!(store.snapshots.get(&key).map(|e| e.value().clone()), Some(snapshot(i)));
        }
    }

    #[tokio::test]
    async fn concurrent_writes_to_same_key_leave_one_complete_record() {
        let store = Arc::new(InMemoryArtifactStore::new());
        let key = SnapshotKey::new("s1", "n1");

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            let key = key.clone();
            handles.push(tokio::spawn(
                async move { store.put_snapshot(key, snapshot(i)).await },
            ));
        }
        for handle in handles {
            handle.await.expect("join").expect("store");
        }

        // Exactly one of the written records survives, never a mix
        let stored = store.snapshots.get(&key).map(|e| e.value().clone()).expect("present");
        let marker = stored.inputs["marker"].as_i64().expect("marker");
        assert!((0..16).contains(&marker));
        assert_eq!(stored, snapshot(marker));
        assert_eq!(store.counts().await.expect("store").snapshots, 1);
    }
}
