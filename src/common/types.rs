/// A generic boxed error type.
pub type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// A convenient Result alias returning `AnyError`.
pub type AnyResult<T> = std::result::Result<T, AnyError>;

/// Platform-assigned public video identifier (the "BV..." string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Bvid(pub String);

impl From<String> for Bvid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Bvid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::ops::Deref for Bvid {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Bvid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Internal numeric identifier for a video's primary media part. Playback
/// endpoints are keyed by this, not by the public identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Cid(pub u64);

impl From<u64> for Cid {
    fn from(u: u64) -> Self {
        Self(u)
    }
}

impl std::fmt::Display for Cid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One video entry from a search page. Everything else the search API
/// returns per entry is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoHit {
    pub bvid: Bvid,
    pub title: String,
}
