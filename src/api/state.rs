use std::sync::Arc;

use log::warn;

use crate::error::ApiError;
use crate::logic::{grid::Grid, probe::Probe};
use crate::models::probe::ProbeRecord;
use crate::repository::ProbeRepository;

/// Shared by every worker: the grid is fixed after startup, the repository
/// synchronises its own access.
pub struct AppState {
    pub grid: Grid,
    pub probes: Arc<dyn ProbeRepository>,
}

impl AppState {
    pub fn new(grid: Grid, probes: Arc<dyn ProbeRepository>) -> Self {
        Self { grid, probes }
    }

    pub async fn load(&self, id: u64) -> Result<ProbeRecord, ApiError> {
        self.probes.find(id).await.ok_or_else(|| {
            warn!("Probe {id} not found");
            ApiError::NotFound(id)
        })
    }

    /// Rebuilds a live probe from its record; the visited set starts at the stored cell.
    pub fn probe_for<'a>(&'a self, record: &ProbeRecord) -> Probe<'a> {
        Probe::new(record.x, record.y, record.direction, &self.grid)
    }

    /// Copies the probe's position and heading into `record` and stores it.
    pub async fn write_back(
        &self,
        mut record: ProbeRecord,
        probe: &Probe<'_>,
    ) -> Result<ProbeRecord, ApiError> {
        record.x = probe.x();
        record.y = probe.y();
        record.direction = probe.direction();
        let id = record.id;
        self.probes.save(&record).await.ok_or(ApiError::NotFound(id))
    }
}
