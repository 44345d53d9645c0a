use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use log::info;
use probe::{
    api::{openapi::ApiDoc, state::AppState},
    config::AppConfig,
    repository::InMemoryProbeRepository,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let grid = config.grid();
    info!(
        "Grid {}x{} with obstacles {:?}",
        grid.width(),
        grid.height(),
        grid.obstacles()
    );
    let state = web::Data::new(AppState::new(grid, Arc::new(InMemoryProbeRepository::new())));

    let bind_addr = config.bind_addr.clone();
    info!("Probe API started at http://{bind_addr}");
    info!("Swagger UI at http://{bind_addr}/swagger-ui/");
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(probe::api::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("JSON deserialization error: {err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
