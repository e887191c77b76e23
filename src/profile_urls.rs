use crate::tiktok::Follower;
use tracing::debug;

const PROFILE_URL_PREFIX: &str = "https://www.tiktok.com/@";

/// Build the public profile URL for a TikTok handle
/// Format: https://www.tiktok.com/@handle
pub fn profile_url(unique_id: &str) -> String {
    format!("{PROFILE_URL_PREFIX}{unique_id}")
}

/// Derive profile URLs for followers, preserving their order.
///
/// Followers without a `unique_id`, or with an empty one, are skipped.
/// No sorting or de-duplication is applied.
pub fn profile_urls_from_followers(followers: &[Follower]) -> Vec<String> {
    let urls: Vec<String> = followers
        .iter()
        .filter_map(|follower| follower.unique_id.as_deref())
        .filter(|unique_id| !unique_id.is_empty())
        .map(profile_url)
        .collect();

    let skipped = followers.len() - urls.len();
    if skipped > 0 {
        debug!("Skipped {skipped} follower records without a unique_id");
    }

    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn follower(unique_id: Option<&str>) -> Follower {
        Follower {
            unique_id: unique_id.map(str::to_string),
        }
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(profile_url("alice"), "https://www.tiktok.com/@alice");
        assert_eq!(profile_url("user.name_1"), "https://www.tiktok.com/@user.name_1");
    }

    #[test]
    fn test_skips_missing_and_empty_ids() {
        let followers = vec![
            follower(Some("alice")),
            follower(Some("")),
            follower(None),
            follower(Some("bob")),
        ];

        assert_eq!(
            profile_urls_from_followers(&followers),
            vec![
                "https://www.tiktok.com/@alice".to_string(),
                "https://www.tiktok.com/@bob".to_string(),
            ]
        );
    }

    #[test]
    fn test_keeps_order_and_duplicates() {
        let followers = vec![
            follower(Some("zed")),
            follower(Some("amy")),
            follower(Some("zed")),
        ];

        assert_eq!(
            profile_urls_from_followers(&followers),
            vec![
                "https://www.tiktok.com/@zed".to_string(),
                "https://www.tiktok.com/@amy".to_string(),
                "https://www.tiktok.com/@zed".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_followers() {
        assert!(profile_urls_from_followers(&[]).is_empty());
    }
}
