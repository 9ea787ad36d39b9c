use serde::{Deserialize, Serialize};

/// GitHub Issue action.
///
/// GitHub adds action verbs over time; anything unknown is kept verbatim in
/// `Other` instead of failing deserialization.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum GhIssueAction {
    /// Assigned.
    Assigned,
    /// Closed.
    Closed,
    /// Deleted.
    Deleted,
    /// Demilestoned.
    Demilestoned,
    /// Edited.
    Edited,
    /// Labeled.
    Labeled,
    /// Locked.
    Locked,
    /// Milestoned.
    Milestoned,
    /// Opened.
    #[default]
    Opened,
    /// Pinned.
    Pinned,
    /// Reopened.
    Reopened,
    /// Transferred.
    Transferred,
    /// Unassigned.
    Unassigned,
    /// Unlabeled.
    Unlabeled,
    /// Unlocked.
    Unlocked,
    /// Unpinned.
    Unpinned,
    /// Any other action, kept verbatim.
    Other(String),
}

impl GhIssueAction {
    /// Convert action to str.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Assigned => "assigned",
            Self::Closed => "closed",
            Self::Deleted => "deleted",
            Self::Demilestoned => "demilestoned",
            Self::Edited => "edited",
            Self::Labeled => "labeled",
            Self::Locked => "locked",
            Self::Milestoned => "milestoned",
            Self::Opened => "opened",
            Self::Pinned => "pinned",
            Self::Reopened => "reopened",
            Self::Transferred => "transferred",
            Self::Unassigned => "unassigned",
            Self::Unlabeled => "unlabeled",
            Self::Unlocked => "unlocked",
            Self::Unpinned => "unpinned",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for GhIssueAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for GhIssueAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "assigned" => Self::Assigned,
            "closed" => Self::Closed,
            "deleted" => Self::Deleted,
            "demilestoned" => Self::Demilestoned,
            "edited" => Self::Edited,
            "labeled" => Self::Labeled,
            "locked" => Self::Locked,
            "milestoned" => Self::Milestoned,
            "opened" => Self::Opened,
            "pinned" => Self::Pinned,
            "reopened" => Self::Reopened,
            "transferred" => Self::Transferred,
            "unassigned" => Self::Unassigned,
            "unlabeled" => Self::Unlabeled,
            "unlocked" => Self::Unlocked,
            "unpinned" => Self::Unpinned,
            _ => Self::Other(value),
        }
    }
}

impl From<GhIssueAction> for String {
    fn from(action: GhIssueAction) -> Self {
        action.as_str().to_owned()
    }
}
