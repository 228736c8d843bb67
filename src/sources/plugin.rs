use async_trait::async_trait;

use crate::common::{Bvid, SourceError, VideoHit};

/// A platform that can be searched by keyword and resolved to direct audio
/// stream URLs.
#[async_trait]
pub trait AudioSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetches one page of search results. `Ok(vec![])` means the result
    /// set is exhausted, not that the call failed.
    async fn search_page(
        &self,
        keyword: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<VideoHit>, SourceError>;

    /// Resolves a video to the direct URL of its first audio track. The
    /// returned URL is time-limited by the platform.
    async fn resolve_audio_url(&self, bvid: &Bvid) -> Result<String, SourceError>;
}
