use std::collections::HashMap;

use actix_web::{get, http::Method, web, HttpResponse};

use crate::{
    api::state::AppState,
    models::request::{link, ApiResponse, GridApiResponse, GridResponse},
};

/// GET /api/grid
/// Returns the grid dimensions and its obstacles.
#[utoipa::path(
    get,
    path = "/api/grid",
    tag = "grid",
    responses((status = 200, description = "The shared grid", body = GridApiResponse))
)]
#[get("/grid")]
pub async fn get_grid(state: web::Data<AppState>) -> HttpResponse {
    let mut links = HashMap::new();
    links.insert("self".into(), link("/api/grid", Method::GET));
    links.insert("probes".into(), link("/api/probes", Method::GET));
    HttpResponse::Ok().json(ApiResponse::new(GridResponse::from(&state.grid), links))
}
