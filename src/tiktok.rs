use crate::error_utils::{
    create_http_client_with_context, parse_json_with_context, read_http_response_text,
    truncate_for_display,
};
use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt::Display;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// TikTok scraper API specific errors with structured information
#[derive(Debug, Error)]
pub enum TikTokError {
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid request parameter '{name}': {reason}")]
    InvalidParam { name: &'static str, reason: String },
}

pub const DEFAULT_API_BASE: &str = "https://tiktok-scraper7.p.rapidapi.com";
pub const DEFAULT_API_HOST: &str = "tiktok-scraper7.p.rapidapi.com";
pub const DEFAULT_USER_ID: &str = "7468848847311504390";
pub const DEFAULT_COUNT: u32 = 200;
pub const DEFAULT_TIME: u64 = 0;

const FOLLOWERS_PATH: &str = "user/followers";
const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";
const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";

// Error bodies from the gateway can be whole HTML pages
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Query parameters for a single followers listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowersQuery {
    /// Numeric account id whose followers are listed
    pub user_id: String,
    /// Page size requested from the API
    pub count: u32,
    /// Pagination cursor; 0 requests the first page
    pub time: u64,
}

impl Default for FollowersQuery {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            count: DEFAULT_COUNT,
            time: DEFAULT_TIME,
        }
    }
}

impl FollowersQuery {
    /// Rejects parameters the API would only answer with an opaque error
    pub fn validate(&self) -> Result<(), TikTokError> {
        if self.user_id.trim().is_empty() {
            return Err(TikTokError::InvalidParam {
                name: "user_id",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn as_params(&self) -> [(&'static str, String); 3] {
        [
            ("user_id", self.user_id.clone()),
            ("count", self.count.to_string()),
            ("time", self.time.to_string()),
        ]
    }
}

/// Top-level response envelope of the followers endpoint
#[derive(Debug, Deserialize, Default)]
pub struct FollowersResponse {
    /// Missing `data` is treated as an empty payload
    #[serde(default)]
    pub data: FollowersData,
}

/// Payload under `data`. Only a JSON object is accepted; `null` or an array is an error.
#[derive(Debug, Deserialize, Default)]
#[serde(try_from = "Map<String, Value>")]
pub struct FollowersData {
    /// Missing `followers` is treated as an empty list
    pub followers: Vec<Follower>,
}

impl TryFrom<Map<String, Value>> for FollowersData {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let followers = match map.remove("followers") {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };
        Ok(Self { followers })
    }
}

/// A single follower entry. Must be a JSON object; only the handle is read.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(from = "Map<String, Value>")]
pub struct Follower {
    /// `None` when the field is absent, `null`, or not a string.
    /// A non-string handle only drops this follower, not the whole response.
    pub unique_id: Option<String>,
}

impl From<Map<String, Value>> for Follower {
    fn from(mut map: Map<String, Value>) -> Self {
        let unique_id = match map.remove("unique_id") {
            Some(Value::String(unique_id)) => Some(unique_id),
            Some(Value::Null) | None => None,
            Some(other) => {
                debug!("Ignoring non-string unique_id: {other}");
                None
            }
        };
        Self { unique_id }
    }
}

impl FollowersResponse {
    pub fn into_followers(self) -> Vec<Follower> {
        self.data.followers
    }
}

/// Parse a followers response body into the ordered follower list
pub fn parse_followers_response(body: &str) -> Result<Vec<Follower>> {
    let response: FollowersResponse = parse_json_with_context(body, "TikTok followers response")?;
    Ok(response.into_followers())
}

/// Connection settings for the RapidAPI gateway
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_host: String,
    pub api_key: String,
}

/// TikTok scraper API client
pub struct TikTokClient {
    client: Client,
    api_key: String,
    api_host: String,
    followers_url: Url,
}

impl TikTokClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            bail!("RapidAPI key is empty");
        }

        let followers_url = build_followers_url(&config.base_url)?;
        let client = create_http_client_with_context()?;

        debug!("TikTok followers endpoint: {followers_url}");

        Ok(Self {
            client,
            api_key: config.api_key,
            api_host: config.api_host,
            followers_url,
        })
    }

    /// Fetch one page of followers for the queried account.
    ///
    /// Exactly one request is sent. Transport failures, non-success statuses
    /// and malformed bodies are returned as errors without retrying.
    pub async fn get_followers(&self, query: &FollowersQuery) -> Result<Vec<Follower>> {
        query.validate()?;

        debug!(
            user_id = %query.user_id,
            count = query.count,
            time = query.time,
            url = %self.followers_url,
            "Requesting followers from TikTok API"
        );

        let response = self
            .client
            .get(self.followers_url.clone())
            .query(&query.as_params())
            .header(RAPIDAPI_KEY_HEADER, &self.api_key)
            .header(RAPIDAPI_HOST_HEADER, &self.api_host)
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to send followers request for user {user_id}",
                    user_id = query.user_id
                )
            })?;

        let status = response.status();
        debug!("TikTok API responded with status {status}");

        if !status.is_success() {
            return Err(TikTokError::Api {
                status: status.as_u16(),
                message: error_body_message(response.text().await),
            }
            .into());
        }

        let body = read_http_response_text(response, "TikTok followers").await?;
        let followers = parse_followers_response(&body)?;

        debug!(
            "Received {count} follower records for user {user_id}",
            count = followers.len(),
            user_id = query.user_id
        );

        Ok(followers)
    }
}

fn error_body_message<E: Display>(body: Result<String, E>) -> String {
    match body {
        Ok(body) => truncate_for_display(&body, MAX_ERROR_BODY_CHARS),
        Err(e) => format!("<failed to read response body: {e}>"),
    }
}

fn build_followers_url(base_url: &str) -> Result<Url> {
    // Url::join replaces the last path segment unless the base ends with '/'
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    let base = Url::parse(&base).with_context(|| format!("Invalid API base URL: {base_url}"))?;
    base.join(FOLLOWERS_PATH)
        .with_context(|| format!("Failed to build followers URL from {base_url}"))
}
