use dealdesk_domain::ID;

#[derive(Debug, Clone)]
pub struct NotificationQuery {
    pub tenant_id: ID,
    pub user_id: ID,
    pub unread_only: bool,
    pub skip: usize,
    pub limit: usize,
}
