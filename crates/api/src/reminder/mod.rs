mod check_reminders;
mod create_reminders;
mod get_deal_reminders;
mod templates;

use actix_web::web;
pub use check_reminders::{CheckRemindersReport, CheckRemindersUseCase};
pub use create_reminders::{
    create_deliverable_reminders, create_payment_reminders, create_publish_date_reminders,
};
use get_deal_reminders::get_deal_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/deals/{deal_id}/reminders",
        web::get().to(get_deal_reminders_controller),
    );
}
