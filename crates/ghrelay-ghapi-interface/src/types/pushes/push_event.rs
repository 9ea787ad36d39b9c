use serde::{Deserialize, Serialize};

use crate::types::common::{GhCommit, GhCommitUser, GhRepository};

/// GitHub Push event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPushEvent {
    /// Reference.
    #[serde(rename = "ref", default)]
    pub reference: String,
    /// Compare URL.
    pub compare: String,
    /// Head commit.
    pub head_commit: GhCommit,
    /// Pusher.
    pub pusher: Option<GhCommitUser>,
    /// Repository.
    pub repository: Option<GhRepository>,
}
