use serde::{Deserialize, Serialize};

/// GitHub Pull request action.
///
/// GitHub adds action verbs over time; anything unknown is kept verbatim in
/// `Other` instead of failing deserialization.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum GhPullRequestAction {
    /// Assigned.
    #[default]
    Assigned,
    /// Closed.
    Closed,
    /// Converted to draft.
    ConvertedToDraft,
    /// Edited.
    Edited,
    /// Labeled.
    Labeled,
    /// Locked.
    Locked,
    /// Opened.
    Opened,
    /// Reopened.
    Reopened,
    /// Ready for review.
    ReadyForReview,
    /// Review requested.
    ReviewRequested,
    /// Review request removed.
    ReviewRequestRemoved,
    /// Synchronize.
    Synchronize,
    /// Unassigned.
    Unassigned,
    /// Unlabeled.
    Unlabeled,
    /// Unlocked.
    Unlocked,
    /// Any other action, kept verbatim.
    Other(String),
}

impl GhPullRequestAction {
    /// Convert action to str.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Assigned => "assigned",
            Self::Closed => "closed",
            Self::ConvertedToDraft => "converted_to_draft",
            Self::Edited => "edited",
            Self::Labeled => "labeled",
            Self::Locked => "locked",
            Self::Opened => "opened",
            Self::Reopened => "reopened",
            Self::ReadyForReview => "ready_for_review",
            Self::ReviewRequested => "review_requested",
            Self::ReviewRequestRemoved => "review_request_removed",
            Self::Synchronize => "synchronize",
            Self::Unassigned => "unassigned",
            Self::Unlabeled => "unlabeled",
            Self::Unlocked => "unlocked",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for GhPullRequestAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for GhPullRequestAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "assigned" => Self::Assigned,
            "closed" => Self::Closed,
            "converted_to_draft" => Self::ConvertedToDraft,
            "edited" => Self::Edited,
            "labeled" => Self::Labeled,
            "locked" => Self::Locked,
            "opened" => Self::Opened,
            "reopened" => Self::Reopened,
            "ready_for_review" => Self::ReadyForReview,
            "review_requested" => Self::ReviewRequested,
            "review_request_removed" => Self::ReviewRequestRemoved,
            "synchronize" => Self::Synchronize,
            "unassigned" => Self::Unassigned,
            "unlabeled" => Self::Unlabeled,
            "unlocked" => Self::Unlocked,
            _ => Self::Other(value),
        }
    }
}

impl From<GhPullRequestAction> for String {
    fn from(action: GhPullRequestAction) -> Self {
        action.as_str().to_owned()
    }
}
