//! Notification rendering.
//!
//! Each handled event type has a parse function turning a raw webhook body
//! into its typed payload, and a render function producing the notification
//! string. Parsing only happens on bodies whose signature was already
//! verified.

use ghrelay_ghapi_interface::types::{GhIssuesEvent, GhPingEvent, GhPullRequestEvent, GhPushEvent};
use serde::Deserialize;

use crate::{errors::Result, DomainError, EventType};

fn parse_event_type<'de, T>(event_type: EventType, body: &'de str) -> Result<T>
where
    T: Deserialize<'de>,
{
    serde_json::from_str(body).map_err(|e| DomainError::MalformedEvent {
        event_type,
        source: e,
    })
}

/// Parse a push event payload.
pub fn parse_push_event(body: &str) -> Result<GhPushEvent> {
    parse_event_type(EventType::Push, body)
}

/// Parse a pull request event payload.
pub fn parse_pull_request_event(body: &str) -> Result<GhPullRequestEvent> {
    parse_event_type(EventType::PullRequest, body)
}

/// Parse an issues event payload.
pub fn parse_issues_event(body: &str) -> Result<GhIssuesEvent> {
    parse_event_type(EventType::Issues, body)
}

/// Parse a ping event payload.
pub fn parse_ping_event(body: &str) -> Result<GhPingEvent> {
    parse_event_type(EventType::Ping, body)
}

/// Render a push event notification.
pub fn render_push_notification(event: &GhPushEvent) -> String {
    format!(
        "New push by {}: `{}` <{}>",
        event.head_commit.committer.name, event.head_commit.message, event.compare
    )
}

/// Render a pull request event notification.
pub fn render_pull_request_notification(event: &GhPullRequestEvent) -> String {
    format!(
        "Pull Request {} by {}: #{}: `{}` <{}>",
        event.action,
        event.pull_request.user.login,
        event.number,
        event.pull_request.title,
        event.pull_request.html_url
    )
}

/// Render an issues event notification.
pub fn render_issues_notification(event: &GhIssuesEvent) -> String {
    format!(
        "Issue {} by {}: #{}: `{}` <{}>",
        event.action,
        event.issue.user.login,
        event.issue.number,
        event.issue.title,
        event.issue.html_url
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::DomainError;

    #[test]
    fn test_push_notification() {
        let event = parse_push_event(
            r#"{
                "compare": "http://x/y",
                "head_commit": {
                    "message": "fix bug",
                    "committer": {"name": "Ada"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            render_push_notification(&event),
            "New push by Ada: `fix bug` <http://x/y>"
        );
    }

    #[test]
    fn test_pull_request_notification() {
        let event = parse_pull_request_event(
            r#"{
                "action": "opened",
                "number": 42,
                "pull_request": {
                    "number": 42,
                    "title": "Add feature",
                    "html_url": "http://x",
                    "user": {"login": "bob"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            render_pull_request_notification(&event),
            "Pull Request opened by bob: #42: `Add feature` <http://x>"
        );
    }

    #[test]
    fn test_pull_request_notification_unknown_action() {
        // Action verbs GitHub introduced after the enum was written must
        // still relay verbatim.
        let event = parse_pull_request_event(
            r#"{
                "action": "auto_merge_enabled",
                "number": 42,
                "pull_request": {
                    "number": 42,
                    "title": "Add feature",
                    "html_url": "http://x",
                    "user": {"login": "bob"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            render_pull_request_notification(&event),
            "Pull Request auto_merge_enabled by bob: #42: `Add feature` <http://x>"
        );
    }

    #[test]
    fn test_issues_notification_unknown_action() {
        let event = parse_issues_event(
            r#"{
                "action": "typed",
                "issue": {
                    "number": 7,
                    "title": "Broken build",
                    "html_url": "http://x/issues/7",
                    "user": {"login": "alice"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            render_issues_notification(&event),
            "Issue typed by alice: #7: `Broken build` <http://x/issues/7>"
        );
    }

    #[test]
    fn test_issues_notification() {
        let event = parse_issues_event(
            r#"{
                "action": "closed",
                "issue": {
                    "number": 7,
                    "title": "Broken build",
                    "html_url": "http://x/issues/7",
                    "user": {"login": "alice"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            render_issues_notification(&event),
            "Issue closed by alice: #7: `Broken build` <http://x/issues/7>"
        );
    }

    #[test]
    fn test_issues_event_missing_fields() {
        let result = parse_issues_event(r#"{"action": "closed", "issue": {}}"#);
        assert!(matches!(
            result,
            Err(DomainError::MalformedEvent { .. })
        ));
    }

    #[test]
    fn test_push_event_missing_head_commit() {
        let result = parse_push_event(r#"{"compare": "http://x/y"}"#);
        assert!(matches!(
            result,
            Err(DomainError::MalformedEvent { .. })
        ));
    }
}
