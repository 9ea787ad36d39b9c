//! Ping webhook handlers.

use actix_web::HttpResponse;
use ghrelay_core::notifications;
use ghrelay_ghapi_interface::types::GhPingEvent;
use tracing::info;

use crate::{Result, ServerError};

pub(crate) fn parse_ping_event(body: &str) -> Result<GhPingEvent> {
    notifications::parse_ping_event(body).map_err(|e| ServerError::DomainError { source: e })
}

pub(crate) fn ping_event(event: GhPingEvent) -> HttpResponse {
    if let Some(repo) = event.repository {
        info!(
            message = "Ping event from repository",
            repository_path = %repo.full_name
        );
    } else {
        info!("Ping event without repository");
    }

    HttpResponse::Accepted().body("Ping.")
}
