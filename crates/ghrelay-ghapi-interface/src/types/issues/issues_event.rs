use serde::{Deserialize, Serialize};

use super::{GhIssue, GhIssueAction};
use crate::types::common::{GhRepository, GhUser};

/// GitHub Issues event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhIssuesEvent {
    /// Action.
    pub action: GhIssueAction,
    /// Issue.
    pub issue: GhIssue,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
