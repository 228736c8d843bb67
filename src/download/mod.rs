use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use futures::{Stream, StreamExt, pin_mut};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::common::{DownloadError, VideoHit};

const AUDIO_EXT: &str = "mp3";

/// Receives resolved audio URLs and persists them.
#[async_trait]
pub trait Sink: Send + Sync {
    async fn save(&self, url: &str, hit: &VideoHit) -> Result<PathBuf, DownloadError>;
}

/// Streams audio URLs into files under a single output directory.
pub struct Downloader {
    client: reqwest::Client,
    output_dir: PathBuf,
}

impl Downloader {
    pub fn new(client: reqwest::Client, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    /// Target path for a hit: sanitized title plus the fixed extension.
    /// Falls back to the bvid when the title sanitizes to nothing, so the
    /// file never ends up with an empty stem.
    fn target_path(&self, hit: &VideoHit) -> PathBuf {
        let stem = sanitize_title(&hit.title);
        let stem = if stem.is_empty() {
            hit.bvid.to_string()
        } else {
            stem
        };
        self.output_dir.join(format!("{}.{}", stem, AUDIO_EXT))
    }

    /// Writes a chunked byte stream to `path`, truncating any existing
    /// file. Empty chunks are skipped.
    async fn write_stream<S>(path: &Path, stream: S) -> Result<(), DownloadError>
    where
        S: Stream<Item = Result<Bytes, reqwest::Error>>,
    {
        let mut file = fs::File::create(path).await?;
        pin_mut!(stream);
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if chunk.is_empty() {
                continue;
            }
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl Sink for Downloader {
    async fn save(&self, url: &str, hit: &VideoHit) -> Result<PathBuf, DownloadError> {
        fs::create_dir_all(&self.output_dir).await?;
        let path = self.target_path(hit);

        let response = self.client.get(url).send().await?.error_for_status()?;
        Self::write_stream(&path, response.bytes_stream()).await?;

        debug!("wrote {}", path.display());
        Ok(path)
    }
}

/// Keeps only alphanumeric characters (Unicode-aware, so CJK titles
/// survive), spaces, hyphens, and underscores, then trims trailing
/// whitespace.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim_end()
        .to_string()
}
