use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::GhCommitUser;

/// GitHub Commit.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommit {
    /// SHA.
    pub id: Option<String>,
    /// Message.
    pub message: String,
    /// Timestamp.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
    /// Author.
    pub author: Option<GhCommitUser>,
    /// Committer.
    pub committer: GhCommitUser,
    /// URL.
    pub url: Option<String>,
}
