use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// JSON parsing error handling utilities
///
/// Parse JSON from string with contextual error handling
pub fn parse_json_with_context<T: DeserializeOwned>(json_str: &str, data_desc: &str) -> Result<T> {
    serde_json::from_str(json_str).with_context(|| format!("Failed to parse {data_desc} from JSON"))
}

/// HTTP request error handling utilities
///
/// Read an HTTP response body as text with contextual error handling
pub async fn read_http_response_text(response: reqwest::Response, api_desc: &str) -> Result<String> {
    response
        .text()
        .await
        .with_context(|| format!("Failed to read {api_desc} response body"))
}

/// Create HTTP client with contextual error handling
pub fn create_http_client_with_context() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .build()
        .context("Failed to create HTTP client")
}

/// Shorten a response body for inclusion in an error message
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let prefix: String = trimmed.chars().take(max_chars).collect();
    format!("{prefix}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, PartialEq, Debug)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_json_parsing_with_context() {
        let parsed: TestData =
            parse_json_with_context(r#"{"name": "test", "value": 42}"#, "test data").unwrap();
        assert_eq!(
            parsed,
            TestData {
                name: "test".to_string(),
                value: 42
            }
        );
    }

    #[test]
    fn test_json_parsing_error_mentions_description() {
        let err = parse_json_with_context::<TestData>("not json", "test data").unwrap_err();
        assert!(err.to_string().contains("test data"));
    }

    #[test]
    fn test_create_http_client() {
        let client = create_http_client_with_context().unwrap();
        // Just test that we can create a client without error
        assert!(client.get("https://example.com").build().is_ok());
    }

    #[test]
    fn test_truncate_for_display() {
        assert_eq!(truncate_for_display("  short  ", 10), "short");
        assert_eq!(truncate_for_display("abcdefghij", 4), "abcd...");
        // Multi-byte characters are never split
        assert_eq!(truncate_for_display("ééééé", 2), "éé...");
    }
}
