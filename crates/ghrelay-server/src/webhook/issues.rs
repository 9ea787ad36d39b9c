//! Issue webhook handlers.

use actix_web::HttpResponse;
use ghrelay_core::notifications;
use ghrelay_ghapi_interface::types::GhIssuesEvent;

use crate::{server::AppContext, Result, ServerError};

pub(crate) fn parse_issues_event(body: &str) -> Result<GhIssuesEvent> {
    notifications::parse_issues_event(body).map_err(|e| ServerError::DomainError { source: e })
}

pub(crate) async fn issues_event(ctx: &AppContext, event: GhIssuesEvent) -> Result<HttpResponse> {
    let notification = notifications::render_issues_notification(&event);
    ctx.notifier_service
        .message_send(&ctx.config.discord_channel_id, &notification)
        .await
        .map_err(|e| ServerError::NotifierError { source: e })?;

    Ok(HttpResponse::Ok().body("Issue."))
}
