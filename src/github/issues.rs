use serde::{Deserialize, Serialize};

/// Request body for the GitHub create-issue endpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Struct representing the subset of the GitHub create-issue response we
/// read back.
#[derive(Deserialize, Debug, PartialEq)]
pub struct CreatedIssue {
    /// The number assigned to the created issue.
    pub number: u64,
    /// Browser URL of the created issue.
    pub html_url: String,
}

/// Extracts the created issue from a GitHub create-issue API JSON response
/// string.
///
/// # Returns
///
/// * `Ok(issue)` if parsing succeeds.
/// * `Err(error_message)` if parsing fails.
pub fn parse_created_issue(json: &str) -> Result<CreatedIssue, String> {
    serde_json::from_str::<CreatedIssue>(json)
        .map_err(|e| format!("Failed to parse issue response: {e}"))
}
