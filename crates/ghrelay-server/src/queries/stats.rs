//! Repository statistics handler.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::{server::AppContext, Result, ServerError};

#[derive(Debug, Serialize)]
pub(crate) struct RepoStatsResponse {
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub open_pull_requests: u64,
}

#[tracing::instrument(skip_all)]
pub(crate) async fn repo_stats(ctx: web::Data<AppContext>) -> Result<HttpResponse> {
    let owner = &ctx.config.repository_owner;
    let name = &ctx.config.repository_name;

    let repository = ctx
        .api_service
        .repository_get(owner, name)
        .await
        .map_err(|e| ServerError::ApiError { source: e })?;
    let open_issues = ctx
        .api_service
        .issues_count_open(owner, name)
        .await
        .map_err(|e| ServerError::ApiError { source: e })?;
    let open_pull_requests = ctx
        .api_service
        .pull_requests_count_open(owner, name)
        .await
        .map_err(|e| ServerError::ApiError { source: e })?;

    Ok(HttpResponse::Ok().json(RepoStatsResponse {
        stars: repository.stargazers_count,
        forks: repository.forks_count,
        open_issues,
        open_pull_requests,
    }))
}
