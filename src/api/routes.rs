use actix_web::web;

use crate::api::handlers::{
    create_probe, delete_probe, execute_commands, get_grid, get_probe, get_status, list_probes,
    move_probe, turn_probe,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(get_grid)
            .service(list_probes)
            .service(create_probe)
            .service(get_probe)
            .service(delete_probe)
            .service(get_status)
            .service(execute_commands)
            .service(move_probe)
            .service(turn_probe),
    );
}
