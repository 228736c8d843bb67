use thiserror::Error;

/// Failures raised while talking to the platform API.
///
/// Callers distinguish "no results" (an empty `Ok`) from these; the driver
/// is the only place that converts them into log lines.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response-level status code was non-zero; carries the server message.
    #[error("api error {code}: {message}")]
    Api { code: i64, message: String },

    /// The payload parsed as JSON but a required field was missing.
    #[error("unexpected response shape: missing {0}")]
    Shape(&'static str),

    /// The playurl response came back in the legacy flat format. There is
    /// no fallback to the legacy URL; the item is skipped.
    #[error("playurl response has no dash manifest")]
    NoDash,

    #[error("dash manifest lists no audio track")]
    NoAudioTrack,
}

/// Failures raised while streaming an audio URL to disk.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
