use serde::{Deserialize, Serialize};

use crate::types::common::GhUser;

/// GitHub Pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequest {
    /// Number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// URL.
    pub html_url: String,
    /// User.
    pub user: GhUser,
    /// Body.
    pub body: Option<String>,
}
