use crate::catalog;
use crate::github::issues;
use crate::lifecycle;
use crate::output;
use crate::report;

/// External API endpoints
mod endpoints {
    pub const LIFECYCLE_API: &str = "https://endoflife.date/api";
    pub const GITHUB_API: &str = "https://api.github.com";
}

const GITHUB_TOKEN: &str = std::env!("GITHUB_TOKEN");
const REPO_OWNER: &str = "siramvikram";
const REPO_NAME: &str = "Code";
const USER_AGENT: &str = "eolwatch";

/// Runs one full check: fetches lifecycle data for every tracked operating
/// system, collects the end-of-life warnings, and files them as a single
/// summary issue.
///
/// Any fetch failure or the issue-creation failure aborts the run.
pub async fn run(mut stdout_additional: Option<&mut dyn std::io::Write>) -> anyhow::Result<()> {
    let client = anyhow::Context::context(
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build(),
        "Failed to create HTTP client",
    )?;

    let today = chrono::Local::now().date_naive();
    let mut eol_messages = Vec::new();

    for os_name in catalog::operating_system_names() {
        tracing::info!(os = os_name, "fetching lifecycle data");
        let body = fetch_lifecycle(&client, os_name).await?;
        let messages = lifecycle::eol_messages(os_name, &body, today)?;
        tracing::info!(
            os = os_name,
            count = messages.len(),
            "cycles nearing end of life"
        );
        eol_messages.extend(messages);
    }

    let issue = report::build_summary_issue(chrono::Local::now().naive_local(), &eol_messages);
    let created = anyhow::Context::context(
        create_issue(&client, &issue).await,
        "Failed to create summary issue",
    )?;

    tracing::info!(number = created.number, "summary issue created");
    output::println(
        &format!("Created issue #{}: {}", created.number, created.html_url),
        &mut stdout_additional,
    )?;

    Ok(())
}

async fn fetch_lifecycle(client: &reqwest::Client, os_name: &str) -> anyhow::Result<String> {
    let url = format!("{}/{}.json", endpoints::LIFECYCLE_API, os_name);
    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "Failed to fetch lifecycle data for {}: HTTP {}",
            os_name,
            response.status()
        ));
    }

    Ok(response.text().await?)
}

async fn create_issue(
    client: &reqwest::Client,
    issue: &issues::NewIssue,
) -> anyhow::Result<issues::CreatedIssue> {
    let url = format!(
        "{}/repos/{}/{}/issues",
        endpoints::GITHUB_API,
        REPO_OWNER,
        REPO_NAME
    );
    let response = client
        .post(&url)
        .bearer_auth(GITHUB_TOKEN)
        .header("Accept", "application/vnd.github.v3+json")
        .header("User-Agent", USER_AGENT)
        .json(issue)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "API request error: {}",
            response.status()
        ));
    }

    let text = response.text().await?;
    issues::parse_created_issue(&text).map_err(|e| anyhow::anyhow!(e))
}
