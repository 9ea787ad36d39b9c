use async_trait::async_trait;

use crate::{
    types::{GhCommitInfo, GhIssue, GhRepository},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(feature = "testkit", mockall::automock)]
#[async_trait(?Send)]
pub trait ApiService: Send + Sync {
    /// Get a repository.
    async fn repository_get(&self, owner: &str, name: &str) -> Result<GhRepository>;
    /// Count open issues on a repository, pull requests excluded.
    async fn issues_count_open(&self, owner: &str, name: &str) -> Result<u64>;
    /// Count open pull requests on a repository.
    async fn pull_requests_count_open(&self, owner: &str, name: &str) -> Result<u64>;
    /// Get the latest commit on the default branch of a repository.
    async fn commits_get_latest(&self, owner: &str, name: &str) -> Result<GhCommitInfo>;
    /// Create an issue on a repository.
    async fn issues_create(
        &self,
        owner: &str,
        name: &str,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<GhIssue>;
}
