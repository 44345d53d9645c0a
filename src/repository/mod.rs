use async_trait::async_trait;

use crate::models::probe::{NewProbe, ProbeRecord};

pub mod memory;

pub use memory::InMemoryProbeRepository;

/// Storage of probe records. Only position and heading are kept.
#[async_trait]
pub trait ProbeRepository: Send + Sync {
    async fn create(&self, probe: NewProbe) -> ProbeRecord;

    async fn find(&self, id: u64) -> Option<ProbeRecord>;

    /// All records, ordered by id.
    async fn list(&self) -> Vec<ProbeRecord>;

    /// Overwrites position and heading of an existing record and refreshes
    /// `updated_at`. Returns `None` when the id is unknown.
    async fn save(&self, probe: &ProbeRecord) -> Option<ProbeRecord>;

    /// Returns `false` when the id is unknown.
    async fn delete(&self, id: u64) -> bool;
}
