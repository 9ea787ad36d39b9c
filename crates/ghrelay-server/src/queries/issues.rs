//! Issue creation handler.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{server::AppContext, Result, ServerError};

#[derive(Debug, Deserialize)]
pub(crate) struct CreateIssueRequest {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[tracing::instrument(skip_all, fields(title = %request.title))]
pub(crate) async fn create_issue(
    ctx: web::Data<AppContext>,
    request: web::Json<CreateIssueRequest>,
) -> Result<HttpResponse> {
    let issue = ctx
        .api_service
        .issues_create(
            &ctx.config.repository_owner,
            &ctx.config.repository_name,
            &request.title,
            &request.body,
            &request.labels,
        )
        .await
        .map_err(|e| ServerError::ApiError { source: e })?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Issue created successfully",
        "issue_url": issue.html_url,
        "issue_number": issue.number
    })))
}
