// Route exports
pub mod checks;

use actix_web::web;

pub use checks::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(checks::configure),
    );
}
