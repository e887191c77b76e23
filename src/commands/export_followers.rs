use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::profile_urls::profile_urls_from_followers;
use crate::storage;
use crate::tiktok::{FollowersQuery, TikTokClient};

/// Outcome of one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub written: usize,
    pub path: PathBuf,
}

impl ExportSummary {
    /// Human-readable one-line report for the console
    pub fn summary_line(&self) -> String {
        format!(
            "{written} URLs saved to {path}",
            written = self.written,
            path = self.path.display()
        )
    }
}

/// Fetch a user's followers and save their profile URLs to a file
pub async fn execute(
    client: &TikTokClient,
    query: &FollowersQuery,
    output_path: &Path,
) -> Result<ExportSummary> {
    info!(
        "Fetching followers for user {user_id}",
        user_id = query.user_id
    );

    let followers = client
        .get_followers(query)
        .await
        .context("Failed to fetch followers")?;

    let urls = profile_urls_from_followers(&followers);

    let written =
        storage::write_url_list(&urls, output_path).context("Failed to save follower URLs")?;

    Ok(ExportSummary {
        written,
        path: output_path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let summary = ExportSummary {
            written: 2,
            path: PathBuf::from("urls.txt"),
        };
        assert_eq!(summary.summary_line(), "2 URLs saved to urls.txt");
    }
}
