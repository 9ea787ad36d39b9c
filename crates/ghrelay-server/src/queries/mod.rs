//! Query handlers.
//!
//! HTTP API consumed by the Discord bot, forwarding to the GitHub API.

mod commits;
mod issues;
mod stats;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure query handlers.
pub fn configure_query_handlers(cfg: &mut web::ServiceConfig) {
    cfg.route("/repo-stats", web::get().to(stats::repo_stats))
        .route("/latest-commit", web::get().to(commits::latest_commit))
        .route("/create-issue", web::post().to(issues::create_issue));
}
