use utoipa::OpenApi;

use crate::{
    logic::commands::{BlockedCommand, DispatchPolicy},
    models::{
        probe::ProbeRecord,
        request::{
            CommandApiResponse, CommandRequest, CommandResponse, CreateProbeRequest,
            ErrorResponse, GridApiResponse, GridResponse, Link, Pagination, ProbeApiResponse,
            ProbeListResponse, ProbeStatus, StatusApiResponse,
        },
        Direction, Point,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Probe API",
        description = "Drive probes across a bounded grid with obstacles: create and store probes, move and turn them one step at a time, or run command strings such as `FFRFF`.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::grid::get_grid,
        crate::api::handlers::probes::list_probes,
        crate::api::handlers::probes::create_probe,
        crate::api::handlers::probes::get_probe,
        crate::api::handlers::probes::delete_probe,
        crate::api::handlers::control::execute_commands,
        crate::api::handlers::control::move_probe,
        crate::api::handlers::control::turn_probe,
        crate::api::handlers::control::get_status,
    ),
    components(
        schemas(
            // Domain
            Point, Direction, ProbeRecord, DispatchPolicy, BlockedCommand,
            // Requests
            CreateProbeRequest, CommandRequest,
            // Responses
            ProbeStatus, CommandResponse, GridResponse,
            // Shared
            Link, Pagination, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            ProbeApiResponse,
            StatusApiResponse,
            CommandApiResponse,
            GridApiResponse,
            ProbeListResponse,
        )
    ),
    tags(
        (name = "grid",    description = "The shared grid and its obstacles"),
        (name = "probes",  description = "Stored probes: create, list, read, delete"),
        (name = "control", description = "Move, turn and command stored probes"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/grid",
            "/api/probes",
            "/api/probes/{id}",
            "/api/probes/{id}/commands",
            "/api/probes/{id}/move",
            "/api/probes/{id}/turn",
            "/api/probes/{id}/status",
        ] {
            assert!(paths.contains(&expected), "Missing path {expected}");
        }
    }
}
