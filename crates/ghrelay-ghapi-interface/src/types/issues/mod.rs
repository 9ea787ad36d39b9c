mod issue;
mod issue_action;
mod issues_event;

pub use issue::GhIssue;
pub use issue_action::GhIssueAction;
pub use issues_event::GhIssuesEvent;
