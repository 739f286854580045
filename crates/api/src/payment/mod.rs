mod create_payment;

use actix_web::web;
use create_payment::create_payment_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/deals/{deal_id}/payments",
        web::post().to(create_payment_controller),
    );
}
