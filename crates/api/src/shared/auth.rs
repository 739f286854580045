use crate::error::DealdeskError;
use actix_web::HttpRequest;
use dealdesk_domain::{User, ID};
use dealdesk_infra::DealdeskContext;

pub const TENANT_HEADER: &str = "dealdesk-tenant";
pub const USER_HEADER: &str = "dealdesk-user";

fn parse_id_header(req: &HttpRequest, name: &str) -> Result<ID, DealdeskError> {
    match req.headers().get(name) {
        Some(value) => match value.to_str().ok().and_then(|v| v.parse::<ID>().ok()) {
            Some(id) => Ok(id),
            None => Err(DealdeskError::UnidentifiableClient(format!(
                "Malformed {} header provided: {:?}",
                name, value
            ))),
        },
        None => Err(DealdeskError::UnidentifiableClient(format!(
            "Unable to find {} header",
            name
        ))),
    }
}

/// Resolves the `User` making the request. Authentication happens upstream,
/// the headers only carry the tenant and user the request is scoped to.
pub async fn protect_route(
    req: &HttpRequest,
    ctx: &DealdeskContext,
) -> Result<User, DealdeskError> {
    let tenant_id = parse_id_header(req, TENANT_HEADER)?;
    let user_id = parse_id_header(req, USER_HEADER)?;

    match ctx.repos.users.find_by_tenant_id(&user_id, &tenant_id).await {
        Some(user) => Ok(user),
        None => Err(DealdeskError::Unauthorized(
            "Unable to find the user in the given tenant".into(),
        )),
    }
}
