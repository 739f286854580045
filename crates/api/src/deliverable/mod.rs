mod create_deliverable;

use actix_web::web;
use create_deliverable::create_deliverable_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/deals/{deal_id}/deliverables",
        web::post().to(create_deliverable_controller),
    );
}
