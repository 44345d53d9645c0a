use std::collections::HashMap;

use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

use crate::logic::{
    commands::{BlockedCommand, DispatchPolicy},
    grid::Grid,
    probe::Probe,
};
use crate::models::{probe::ProbeRecord, Direction, Point};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String, example = "GET")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Links every probe resource carries.
pub fn probe_links(id: u64) -> Links {
    let base = format!("/api/probes/{id}");
    let mut links = HashMap::new();
    links.insert("self".into(), link(base.clone(), Method::GET));
    links.insert("status".into(), link(format!("{base}/status"), Method::GET));
    links.insert("commands".into(), link(format!("{base}/commands"), Method::POST));
    links.insert("move".into(), link(format!("{base}/move"), Method::POST));
    links.insert("turn".into(), link(format!("{base}/turn"), Method::POST));
    links.insert("delete".into(), link(base, Method::DELETE));
    links.insert("collection".into(), link("/api/probes", Method::GET));
    links
}

/// Pagination metadata included in responses that return lists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    ProbeApiResponse = ApiResponse<ProbeRecord>,
    StatusApiResponse = ApiResponse<ProbeStatus>,
    CommandApiResponse = ApiResponse<CommandResponse>,
    GridApiResponse = ApiResponse<GridResponse>
)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            links,
        }
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(ProbeListResponse = PaginatedResponse<ProbeApiResponse>)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            links,
            pagination,
        }
    }
}

/// Error body shared by every failing endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Character index of the refused move, when a command string was halted.
    pub index: Option<usize>,
    /// The refused command character.
    pub command: Option<char>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            index: None,
            command: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProbeRequest {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CommandRequest {
    /// Command letters: `F` forward, `B` backward, `L` turn left, `R` turn right.
    /// Other characters are ignored.
    #[schema(example = "FFRFF")]
    pub commands: String,
    /// Defaults to `stopOnBlock`.
    #[serde(default)]
    pub policy: DispatchPolicy,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MoveQuery {
    /// `true` moves forward, `false` backward.
    #[serde(default = "default_true")]
    pub forward: bool,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TurnQuery {
    /// `true` turns left, `false` right.
    #[serde(default = "default_true")]
    pub left: bool,
}

fn default_true() -> bool {
    true
}

/// Position, heading and visited cells of a live probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProbeStatus {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
    /// Sorted by (x, y).
    pub visited: Vec<Point>,
}

impl From<&Probe<'_>> for ProbeStatus {
    fn from(probe: &Probe<'_>) -> Self {
        Self {
            x: probe.x(),
            y: probe.y(),
            direction: probe.direction(),
            visited: probe.visited().into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommandResponse {
    #[serde(flatten)]
    pub status: ProbeStatus,
    /// Moves refused and skipped under the best-effort policy.
    pub skipped: Vec<BlockedCommand>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GridResponse {
    pub width: i32,
    pub height: i32,
    pub obstacles: Vec<Point>,
}

impl From<&Grid> for GridResponse {
    fn from(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            obstacles: grid.obstacles(),
        }
    }
}
