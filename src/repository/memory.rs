use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::probe::{NewProbe, ProbeRecord};
use crate::repository::ProbeRepository;

#[derive(Debug, Default)]
struct Store {
    next_id: u64,
    records: BTreeMap<u64, ProbeRecord>,
}

/// Process-local store; ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryProbeRepository {
    store: RwLock<Store>,
}

impl InMemoryProbeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProbeRepository for InMemoryProbeRepository {
    async fn create(&self, probe: NewProbe) -> ProbeRecord {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let now = Utc::now();
        let record = ProbeRecord {
            id: store.next_id,
            x: probe.x,
            y: probe.y,
            direction: probe.direction,
            created_at: now,
            updated_at: now,
        };
        store.records.insert(record.id, record.clone());
        record
    }

    async fn find(&self, id: u64) -> Option<ProbeRecord> {
        self.store.read().await.records.get(&id).cloned()
    }

    async fn list(&self) -> Vec<ProbeRecord> {
        self.store.read().await.records.values().cloned().collect()
    }

    async fn save(&self, probe: &ProbeRecord) -> Option<ProbeRecord> {
        let mut store = self.store.write().await;
        let stored = store.records.get_mut(&probe.id)?;
        stored.x = probe.x;
        stored.y = probe.y;
        stored.direction = probe.direction;
        stored.updated_at = Utc::now();
        Some(stored.clone())
    }

    async fn delete(&self, id: u64) -> bool {
        self.store.write().await.records.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    fn new_probe(x: i32, y: i32) -> NewProbe {
        NewProbe {
            x,
            y,
            direction: Direction::North,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let repo = InMemoryProbeRepository::new();
        let a = repo.create(new_probe(0, 0)).await;
        let b = repo.create(new_probe(1, 1)).await;
        assert_eq!((a.id, b.id), (1, 2));
        assert!(repo.delete(b.id).await);
        let c = repo.create(new_probe(2, 2)).await;
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_find_and_list() {
        let repo = InMemoryProbeRepository::new();
        let a = repo.create(new_probe(0, 0)).await;
        let b = repo.create(new_probe(3, 4)).await;
        assert_eq!(repo.find(b.id).await, Some(b.clone()));
        assert_eq!(repo.find(99).await, None);
        assert_eq!(repo.list().await, vec![a, b]);
    }

    #[tokio::test]
    async fn test_save_updates_position_only() {
        let repo = InMemoryProbeRepository::new();
        let mut record = repo.create(new_probe(0, 0)).await;
        let created_at = record.created_at;
        record.x = 2;
        record.direction = Direction::East;
        let saved = repo.save(&record).await.unwrap();
        assert_eq!((saved.x, saved.y, saved.direction), (2, 0, Direction::East));
        assert_eq!(saved.created_at, created_at);
        assert!(saved.updated_at >= created_at);
    }

    #[tokio::test]
    async fn test_save_and_delete_unknown_id() {
        let repo = InMemoryProbeRepository::new();
        let mut record = repo.create(new_probe(0, 0)).await;
        record.id = 42;
        assert_eq!(repo.save(&record).await, None);
        assert!(!repo.delete(42).await);
    }
}
