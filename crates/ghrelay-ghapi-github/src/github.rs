//! GitHub adapter.

use async_trait::async_trait;
use ghrelay_config::Config;
use ghrelay_ghapi_interface::{
    types::{GhCommitInfo, GhIssue, GhRepository},
    ApiService, Result,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        Ok(get_authenticated_client_builder(&self.config)?.build()?)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn search_issues_count(&self, query: String) -> Result<u64, GitHubError> {
        #[derive(Deserialize)]
        struct Response {
            total_count: u64,
        }

        Ok(self
            .get_client()?
            .get(self.build_url("/search/issues".into()))
            .query(&[("q", query.as_str()), ("per_page", "1")])
            .send()
            .await?
            .error_for_status()?
            .json::<Response>()
            .await?
            .total_count)
    }

    async fn latest_commit(&self, owner: &str, name: &str) -> Result<GhCommitInfo, GitHubError> {
        #[derive(Deserialize)]
        struct CommitUser {
            name: String,
            #[serde(with = "time::serde::rfc3339")]
            date: OffsetDateTime,
        }

        #[derive(Deserialize)]
        struct Commit {
            message: String,
            author: CommitUser,
        }

        #[derive(Deserialize)]
        struct Response {
            sha: String,
            html_url: String,
            commit: Commit,
        }

        let commits = self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/commits")))
            .query(&[("per_page", "1")])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Response>>()
            .await?;

        commits
            .into_iter()
            .next()
            .map(|c| GhCommitInfo {
                sha: c.sha,
                message: c.commit.message,
                author: c.commit.author.name,
                date: c.commit.author.date,
                html_url: c.html_url,
            })
            .ok_or_else(|| GitHubError::NoCommitFound {
                repository_path: format!("{owner}/{name}"),
            })
    }

    async fn create_issue(
        &self,
        owner: &str,
        name: &str,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<GhIssue, GitHubError> {
        #[derive(Serialize)]
        struct Request<'a> {
            title: &'a str,
            body: &'a str,
            labels: &'a [String],
        }

        Ok(self
            .get_client()?
            .post(self.build_url(format!("/repos/{owner}/{name}/issues")))
            .json(&Request {
                title,
                body,
                labels,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<GhIssue>()
            .await?)
    }
}

#[async_trait(?Send)]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn repository_get(&self, owner: &str, name: &str) -> Result<GhRepository> {
        let repository = self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}")))
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?
            .json::<GhRepository>()
            .await
            .map_err(GitHubError::from)?;

        Ok(repository)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn issues_count_open(&self, owner: &str, name: &str) -> Result<u64> {
        Ok(self
            .search_issues_count(format!("repo:{owner}/{name} type:issue state:open"))
            .await?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_requests_count_open(&self, owner: &str, name: &str) -> Result<u64> {
        Ok(self
            .search_issues_count(format!("repo:{owner}/{name} type:pr state:open"))
            .await?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn commits_get_latest(&self, owner: &str, name: &str) -> Result<GhCommitInfo> {
        Ok(self.latest_commit(owner, name).await?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn issues_create(
        &self,
        owner: &str,
        name: &str,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<GhIssue> {
        Ok(self.create_issue(owner, name, title, body, labels).await?)
    }
}
