use serde::{Deserialize, Serialize};

/// GitHub Commit user.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommitUser {
    /// Name.
    pub name: String,
    /// Email.
    pub email: Option<String>,
    /// Username.
    pub username: Option<String>,
}
