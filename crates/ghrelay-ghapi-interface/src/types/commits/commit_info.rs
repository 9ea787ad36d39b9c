use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

/// GitHub Commit metadata, as returned by the latest-commit query.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, SmartDefault)]
pub struct GhCommitInfo {
    /// SHA.
    pub sha: String,
    /// Message.
    pub message: String,
    /// Author name.
    pub author: String,
    /// Author date.
    #[default(OffsetDateTime::UNIX_EPOCH)]
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// URL.
    pub html_url: String,
}
