use actix_web::{get, post, web, HttpResponse};
use log::{info, warn};

use crate::{
    api::state::AppState,
    error::ApiError,
    logic::commands::{self, DispatchOutcome},
    models::request::{
        probe_links, ApiResponse, CommandApiResponse, CommandRequest, CommandResponse,
        ErrorResponse, MoveQuery, ProbeApiResponse, ProbeStatus, StatusApiResponse, TurnQuery,
    },
};

/// POST /api/probes/{id}/commands
/// Runs a command string against a stored probe and stores where it ends up.
/// Under `stopOnBlock` a refused move still stores the last reached position,
/// then answers 400 naming the command.
#[utoipa::path(
    post,
    path = "/api/probes/{id}/commands",
    tag = "control",
    params(("id" = u64, Path, description = "Probe id")),
    request_body = CommandRequest,
    responses(
        (status = 200, description = "Final state and visited path", body = CommandApiResponse),
        (status = 400, description = "Halted by a blocked or out-of-bounds move", body = ErrorResponse),
        (status = 404, description = "Unknown probe", body = ErrorResponse),
    )
)]
#[post("/probes/{id}/commands")]
pub async fn execute_commands(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<CommandRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let record = state.load(path.into_inner()).await?;
    let mut probe = state.probe_for(&record);

    let outcome = commands::execute_commands(&mut probe, &request.commands, request.policy);
    let record = state.write_back(record, &probe).await?;

    match outcome {
        DispatchOutcome::Halted(blocked) => {
            warn!(
                "Probe {} halted by '{}' at index {}, stopped at ({}, {})",
                record.id, blocked.command, blocked.index, record.x, record.y
            );
            Err(ApiError::BlockedAt(blocked))
        }
        DispatchOutcome::Completed { skipped } => {
            info!(
                "Probe {} ran {} command(s), now at ({}, {}) facing {}",
                record.id,
                request.commands.chars().count(),
                record.x,
                record.y,
                record.direction
            );
            let response = CommandResponse {
                status: ProbeStatus::from(&probe),
                skipped,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::new(response, probe_links(record.id))))
        }
    }
}

/// POST /api/probes/{id}/move?forward=true
/// Moves one cell forward (default) or backward.
#[utoipa::path(
    post,
    path = "/api/probes/{id}/move",
    tag = "control",
    params(("id" = u64, Path, description = "Probe id"), MoveQuery),
    responses(
        (status = 200, description = "Updated probe", body = ProbeApiResponse),
        (status = 400, description = "Blocked or out of bounds", body = ErrorResponse),
        (status = 404, description = "Unknown probe", body = ErrorResponse),
    )
)]
#[post("/probes/{id}/move")]
pub async fn move_probe(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    query: web::Query<MoveQuery>,
) -> Result<HttpResponse, ApiError> {
    let record = state.load(path.into_inner()).await?;
    let mut probe = state.probe_for(&record);

    let moved = if query.forward {
        probe.move_forward()
    } else {
        probe.move_backward()
    };
    if !moved {
        warn!(
            "Probe {} cannot move {} from {} facing {}",
            record.id,
            if query.forward { "forward" } else { "backward" },
            probe.position(),
            probe.direction()
        );
        return Err(ApiError::Blocked);
    }

    let record = state.write_back(record, &probe).await?;
    info!("Probe {} moved to {}", record.id, probe.position());
    let links = probe_links(record.id);
    Ok(HttpResponse::Ok().json(ApiResponse::new(record, links)))
}

/// POST /api/probes/{id}/turn?left=true
/// Turns a quarter left (default) or right. Never fails for a known probe.
#[utoipa::path(
    post,
    path = "/api/probes/{id}/turn",
    tag = "control",
    params(("id" = u64, Path, description = "Probe id"), TurnQuery),
    responses(
        (status = 200, description = "Updated probe", body = ProbeApiResponse),
        (status = 404, description = "Unknown probe", body = ErrorResponse),
    )
)]
#[post("/probes/{id}/turn")]
pub async fn turn_probe(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    query: web::Query<TurnQuery>,
) -> Result<HttpResponse, ApiError> {
    let record = state.load(path.into_inner()).await?;
    let mut probe = state.probe_for(&record);

    if query.left {
        probe.turn_left();
    } else {
        probe.turn_right();
    }

    let record = state.write_back(record, &probe).await?;
    info!("Probe {} now facing {}", record.id, record.direction);
    let links = probe_links(record.id);
    Ok(HttpResponse::Ok().json(ApiResponse::new(record, links)))
}

/// GET /api/probes/{id}/status
/// Current position and heading. Only the stored cell is reported as visited.
#[utoipa::path(
    get,
    path = "/api/probes/{id}/status",
    tag = "control",
    params(("id" = u64, Path, description = "Probe id")),
    responses(
        (status = 200, description = "Probe status", body = StatusApiResponse),
        (status = 404, description = "Unknown probe", body = ErrorResponse),
    )
)]
#[get("/probes/{id}/status")]
pub async fn get_status(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let record = state.load(path.into_inner()).await?;
    let probe = state.probe_for(&record);
    Ok(HttpResponse::Ok().json(ApiResponse::new(
        ProbeStatus::from(&probe),
        probe_links(record.id),
    )))
}
