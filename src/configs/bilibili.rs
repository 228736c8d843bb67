use serde::{Deserialize, Serialize};

/// Cookie header value sent with every API call. Anonymous access works but
/// the platform limits search results and stream quality without a session.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BilibiliConfig {
    pub cookie: Option<String>,
}

impl BilibiliConfig {
    /// Resolves the cookie, letting the `BILIFETCH_COOKIE` environment
    /// variable override the config file so the credential never has to
    /// live on disk.
    pub fn cookie(&self) -> Option<String> {
        std::env::var("BILIFETCH_COOKIE")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.cookie.clone().filter(|s| !s.is_empty()))
    }
}
