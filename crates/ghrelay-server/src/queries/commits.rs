//! Latest commit handler.

use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::macros::format_description;

use crate::{server::AppContext, Result, ServerError};

#[derive(Debug, Serialize)]
pub(crate) struct LatestCommitResponse {
    pub message: String,
    pub author: String,
    pub date: String,
    pub url: String,
}

#[tracing::instrument(skip_all)]
pub(crate) async fn latest_commit(ctx: web::Data<AppContext>) -> Result<HttpResponse> {
    let commit = ctx
        .api_service
        .commits_get_latest(&ctx.config.repository_owner, &ctx.config.repository_name)
        .await
        .map_err(|e| ServerError::ApiError { source: e })?;

    let date = commit
        .date
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .map_err(|_| ServerError::InternalError)?;

    Ok(HttpResponse::Ok().json(LatestCommitResponse {
        message: commit.message,
        author: commit.author,
        date,
        url: commit.html_url,
    }))
}
