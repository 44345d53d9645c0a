use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Direction;

/// Stored state of a probe. The visited path is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProbeRecord {
    pub id: u64,
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to persist a new probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewProbe {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}
