use std::time::Duration;

use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue, ORIGIN, REFERER};
use reqwest::{Client, Error};
use tracing::warn;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

pub const SITE_ORIGIN: &str = "https://www.bilibili.com";
pub const SITE_REFERER: &str = "https://www.bilibili.com/";

/// Builds the shared HTTP client carrying the identification headers the
/// platform expects on every call. Per-video requests override the Referer.
pub fn build_client(cookie: Option<&str>) -> Result<Client, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(REFERER, HeaderValue::from_static(SITE_REFERER));
    headers.insert(ORIGIN, HeaderValue::from_static(SITE_ORIGIN));

    if let Some(cookie) = cookie {
        match HeaderValue::from_str(cookie) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(COOKIE, value);
            }
            Err(_) => warn!("cookie contains characters invalid in a header, ignoring it"),
        }
    }

    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .default_headers(headers)
        .timeout(Duration::from_secs(10))
        .build()
}
