use crate::{APIResponse, BaseClient};
use dealdesk_api_structs::*;
use dealdesk_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

#[derive(Default)]
pub struct GetNotificationsInput {
    pub unread_only: bool,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl GetNotificationsInput {
    fn to_query_string(&self) -> String {
        let mut query = format!("unread={}", self.unread_only);
        if let Some(skip) = self.skip {
            query.push_str(&format!("&skip={}", skip));
        }
        if let Some(limit) = self.limit {
            query.push_str(&format!("&limit={}", limit));
        }
        query
    }
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(
        &self,
        input: GetNotificationsInput,
    ) -> APIResponse<get_notifications::APIResponse> {
        self.base
            .get(
                format!("notifications?{}", input.to_query_string()),
                StatusCode::OK,
            )
            .await
    }

    pub async fn unread_count(&self) -> APIResponse<get_unread_count::APIResponse> {
        self.base
            .get("notifications/unread-count".into(), StatusCode::OK)
            .await
    }

    pub async fn mark_read(
        &self,
        notification_id: ID,
    ) -> APIResponse<mark_notification_read::APIResponse> {
        self.base
            .put(
                (),
                format!("notifications/{}/read", notification_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn mark_all_read(&self) -> APIResponse<mark_all_notifications_read::APIResponse> {
        self.base
            .put((), "notifications/read".into(), StatusCode::OK)
            .await
    }
}
