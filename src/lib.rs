pub mod commands;
pub mod error_utils;
pub mod profile_urls;
pub mod storage;
pub mod tiktok;
