//! Pull webhook handlers.

use actix_web::HttpResponse;
use ghrelay_core::notifications;
use ghrelay_ghapi_interface::types::GhPullRequestEvent;

use crate::{server::AppContext, Result, ServerError};

pub(crate) fn parse_pull_request_event(body: &str) -> Result<GhPullRequestEvent> {
    notifications::parse_pull_request_event(body)
        .map_err(|e| ServerError::DomainError { source: e })
}

pub(crate) async fn pull_request_event(
    ctx: &AppContext,
    event: GhPullRequestEvent,
) -> Result<HttpResponse> {
    let notification = notifications::render_pull_request_notification(&event);
    ctx.notifier_service
        .message_send(&ctx.config.discord_channel_id, &notification)
        .await
        .map_err(|e| ServerError::NotifierError { source: e })?;

    Ok(HttpResponse::Ok().body("Pull request."))
}
