mod create_notification;
mod get_notifications;
mod get_unread_count;
mod mark_all_notifications_read;
mod mark_notification_read;

use actix_web::web;
pub use create_notification::create_notification;
use get_notifications::get_notifications_controller;
use get_unread_count::get_unread_count_controller;
use mark_all_notifications_read::mark_all_notifications_read_controller;
use mark_notification_read::mark_notification_read_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications",
        web::get().to(get_notifications_controller),
    );
    cfg.route(
        "/notifications/unread-count",
        web::get().to(get_unread_count_controller),
    );
    cfg.route(
        "/notifications/read",
        web::put().to(mark_all_notifications_read_controller),
    );
    cfg.route(
        "/notifications/{notification_id}/read",
        web::put().to(mark_notification_read_controller),
    );
}
