mod deliverable;
mod error;
mod job_schedulers;
mod notification;
mod payment;
mod reminder;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use dealdesk_infra::DealdeskContext;
use job_schedulers::{register_job_schedulers, start_job_queue_consumer};
pub use reminder::{
    create_deliverable_reminders, create_payment_reminders, create_publish_date_reminders,
    CheckRemindersReport,
};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    deliverable::configure_routes(cfg);
    notification::configure_routes(cfg);
    payment::configure_routes(cfg);
    reminder::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    /// Fails if the job queue cannot be set up, the service is useless
    /// without its reminder checks
    pub async fn new(context: DealdeskContext) -> anyhow::Result<Self> {
        register_job_schedulers(&context).await?;
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: DealdeskContext) {
        start_job_queue_consumer(context);
    }

    async fn configure_server(context: DealdeskContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let context = web::Data::new(context);
        let server = HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(context.clone())
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
