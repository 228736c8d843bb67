use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ThrottleConfig {
    /// Minimum spacing between successive outbound requests, in
    /// milliseconds. Not adaptive; there is no special handling for 429.
    #[serde(default = "default_request_interval_ms")]
    pub request_interval_ms: u64,
}

fn default_request_interval_ms() -> u64 {
    1000
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            request_interval_ms: default_request_interval_ms(),
        }
    }
}
