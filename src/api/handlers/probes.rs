use std::collections::HashMap;

use actix_web::{delete, get, http::Method, post, web, HttpResponse};
use log::info;

use crate::{
    api::state::AppState,
    error::ApiError,
    models::{
        probe::NewProbe,
        request::{
            link, probe_links, ApiResponse, CreateProbeRequest, ErrorResponse, PaginatedResponse,
            Pagination, ProbeApiResponse, ProbeListResponse,
        },
    },
};

/// GET /api/probes
/// Lists every stored probe.
#[utoipa::path(
    get,
    path = "/api/probes",
    tag = "probes",
    responses((status = 200, description = "All stored probes", body = ProbeListResponse))
)]
#[get("/probes")]
pub async fn list_probes(state: web::Data<AppState>) -> HttpResponse {
    let records = state.probes.list().await;
    let total = records.len();
    let items: Vec<ProbeApiResponse> = records
        .into_iter()
        .map(|r| {
            let links = probe_links(r.id);
            ApiResponse::new(r, links)
        })
        .collect();
    let mut links = HashMap::new();
    links.insert("self".into(), link("/api/probes", Method::GET));
    links.insert("create".into(), link("/api/probes", Method::POST));
    HttpResponse::Ok().json(PaginatedResponse::new(
        items,
        links,
        Pagination { page: 1, per_page: total, total, total_pages: 1 },
    ))
}

/// POST /api/probes
/// Stores a new probe. The start cell must be inside the grid and free.
#[utoipa::path(
    post,
    path = "/api/probes",
    tag = "probes",
    request_body = CreateProbeRequest,
    responses(
        (status = 201, description = "Probe created", body = ProbeApiResponse),
        (status = 400, description = "Start cell outside the grid or on an obstacle", body = ErrorResponse),
    )
)]
#[post("/probes")]
pub async fn create_probe(
    state: web::Data<AppState>,
    body: web::Json<CreateProbeRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let grid = &state.grid;
    if !grid.is_within_bounds(request.x, request.y) {
        return Err(ApiError::Validation(format!(
            "Start position ({}, {}) is outside the {}x{} grid.",
            request.x,
            request.y,
            grid.width(),
            grid.height()
        )));
    }
    if grid.is_obstacle(request.x, request.y) {
        return Err(ApiError::Validation(format!(
            "Start position ({}, {}) is an obstacle.",
            request.x, request.y
        )));
    }

    let record = state
        .probes
        .create(NewProbe {
            x: request.x,
            y: request.y,
            direction: request.direction,
        })
        .await;
    info!(
        "Created probe {} at ({}, {}) facing {}",
        record.id, record.x, record.y, record.direction
    );
    let links = probe_links(record.id);
    Ok(HttpResponse::Created().json(ApiResponse::new(record, links)))
}

/// GET /api/probes/{id}
/// Returns the stored record of a probe.
#[utoipa::path(
    get,
    path = "/api/probes/{id}",
    tag = "probes",
    params(("id" = u64, Path, description = "Probe id")),
    responses(
        (status = 200, description = "Stored probe", body = ProbeApiResponse),
        (status = 404, description = "Unknown probe", body = ErrorResponse),
    )
)]
#[get("/probes/{id}")]
pub async fn get_probe(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let record = state.load(path.into_inner()).await?;
    let links = probe_links(record.id);
    Ok(HttpResponse::Ok().json(ApiResponse::new(record, links)))
}

/// DELETE /api/probes/{id}
#[utoipa::path(
    delete,
    path = "/api/probes/{id}",
    tag = "probes",
    params(("id" = u64, Path, description = "Probe id")),
    responses(
        (status = 204, description = "Probe deleted"),
        (status = 404, description = "Unknown probe", body = ErrorResponse),
    )
)]
#[delete("/probes/{id}")]
pub async fn delete_probe(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if !state.probes.delete(id).await {
        return Err(ApiError::NotFound(id));
    }
    info!("Deleted probe {id}");
    Ok(HttpResponse::NoContent().finish())
}
