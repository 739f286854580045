use dealdesk_api::Application;
use dealdesk_domain::{Deal, User, UserRole, ID};
use dealdesk_infra::{DealdeskContext, StaticTimeSys};
use dealdesk_sdk::DealdeskSDK;
use std::sync::Arc;

// 2024-06-01T00:00:00Z
pub const NOW: i64 = 1717200000000;

pub struct TestApp {
    pub ctx: DealdeskContext,
    pub address: String,
}

impl TestApp {
    pub async fn insert_user(&self, tenant_id: &ID, role: UserRole) -> User {
        let user = User::new(
            tenant_id.clone(),
            "Olivia Owner".into(),
            "olivia@agency.io".into(),
            role,
            NOW,
        );
        self.ctx
            .repos
            .users
            .insert(&user)
            .await
            .expect("To insert user");
        user
    }

    pub async fn insert_deal(&self, tenant_id: &ID) -> Deal {
        let deal = Deal::new(tenant_id.clone(), "Nike Summer Campaign".into(), NOW);
        self.ctx
            .repos
            .deals
            .insert(&deal)
            .await
            .expect("To insert deal");
        deal
    }

    pub fn sdk_for(&self, user: &User) -> DealdeskSDK {
        DealdeskSDK::for_user(self.address.clone(), &user.tenant_id, &user.id)
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, DealdeskSDK) {
    let mut ctx = DealdeskContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.sys = Arc::new(StaticTimeSys(NOW));

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = DealdeskSDK::new(address.clone());
    (TestApp { ctx, address }, sdk)
}
