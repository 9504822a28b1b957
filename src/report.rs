use anyhow::Result;
use chrono::NaiveDateTime;

use crate::github::issues::NewIssue;

/// Label attached to every generated summary issue.
pub const ISSUE_LABEL: &str = "os-support";

pub fn issue_title(now: NaiveDateTime) -> String {
    format!("EOL List - {}", now.format("%Y-%m-%d %H:%M"))
}

pub fn issue_body(messages: &[String]) -> String {
    messages.join("\n")
}

pub fn build_summary_issue(now: NaiveDateTime, messages: &[String]) -> NewIssue {
    NewIssue {
        title: issue_title(now),
        body: issue_body(messages),
        labels: vec![ISSUE_LABEL.to_string()],
    }
}

/// Builds the summary issue and hands it to `issue_creator` exactly once,
/// returning the created issue number.
pub fn publish_report<F>(now: NaiveDateTime, messages: &[String], issue_creator: F) -> Result<u64>
where
    F: Fn(&NewIssue) -> Result<u64>,
{
    let issue = build_summary_issue(now, messages);
    issue_creator(&issue)
}
