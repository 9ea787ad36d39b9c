//! Push webhook handlers.

use actix_web::HttpResponse;
use ghrelay_core::notifications;
use ghrelay_ghapi_interface::types::GhPushEvent;

use crate::{server::AppContext, Result, ServerError};

pub(crate) fn parse_push_event(body: &str) -> Result<GhPushEvent> {
    notifications::parse_push_event(body).map_err(|e| ServerError::DomainError { source: e })
}

pub(crate) async fn push_event(ctx: &AppContext, event: GhPushEvent) -> Result<HttpResponse> {
    let notification = notifications::render_push_notification(&event);
    ctx.notifier_service
        .message_send(&ctx.config.discord_channel_id, &notification)
        .await
        .map_err(|e| ServerError::NotifierError { source: e })?;

    Ok(HttpResponse::Ok().body("Push."))
}
