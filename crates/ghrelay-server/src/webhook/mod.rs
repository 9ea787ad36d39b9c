//! Webhook handlers.

mod issues;
mod ping;
mod pulls;
mod pushes;

#[cfg(test)]
mod tests;

use std::convert::TryFrom;

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use ghrelay_core::EventType;
use tracing::warn;

use self::{
    issues::parse_issues_event, ping::parse_ping_event, pulls::parse_pull_request_event,
    pushes::parse_push_event,
};
use crate::{
    constants::GITHUB_EVENT_HEADER, server::AppContext, utils::convert_payload_to_string, Result,
    ServerError,
};

#[tracing::instrument(skip_all, fields(event_type))]
async fn parse_event(
    ctx: &AppContext,
    event_type: EventType,
    body: &str,
) -> Result<HttpResponse> {
    match event_type {
        EventType::Issues => issues::issues_event(ctx, parse_issues_event(body)?).await,
        EventType::Ping => Ok(ping::ping_event(parse_ping_event(body)?)),
        EventType::PullRequest => {
            pulls::pull_request_event(ctx, parse_pull_request_event(body)?).await
        }
        EventType::Push => pushes::push_event(ctx, parse_push_event(body)?).await,
    }
}

fn extract_event_from_request(req: &HttpRequest) -> Option<EventType> {
    req.headers()
        .get(GITHUB_EVENT_HEADER)
        .and_then(|x| x.to_str().ok())
        .and_then(|x| EventType::try_from(x).ok())
}

#[tracing::instrument(skip_all)]
pub(crate) async fn event_handler(
    req: HttpRequest,
    mut payload: web::Payload,
    ctx: web::Data<AppContext>,
) -> ActixResult<HttpResponse> {
    // Route event depending on header
    if let Some(event_type) = extract_event_from_request(&req) {
        if let Ok(body) = convert_payload_to_string(&mut payload).await {
            match parse_event(&ctx, event_type, &body).await {
                Err(ServerError::DomainError { source }) => {
                    // The sender cannot fix a parsing issue on our side,
                    // so acknowledge the event without delivering anything.
                    warn!(
                        event_type = %event_type,
                        error = %source,
                        message = "Malformed event payload"
                    );
                    Ok(HttpResponse::Ok().json(serde_json::json!({
                        "message": format!("Malformed payload for event '{}'.", event_type)
                    })))
                }
                result => result.map_err(Into::into),
            }
        } else {
            let event_type: &str = event_type.into();
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Bad payload for event '{}'.", event_type)
            })))
        }
    } else {
        Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Unhandled event."})))
    }
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(event_handler)));
}
