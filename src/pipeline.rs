use tracing::{info, warn};

use crate::common::VideoHit;
use crate::configs::SearchConfig;
use crate::download::Sink;
use crate::sources::AudioSource;
use crate::throttle::Throttle;

/// Drives search, resolution, and download for one keyword. Every per-item
/// failure is logged and skipped; the run never aborts once collection has
/// finished. Returns the number of files written.
pub async fn run<S, K>(
    source: &S,
    sink: &K,
    search: &SearchConfig,
    throttle: &mut Throttle,
    keyword: &str,
) -> usize
where
    S: AudioSource + ?Sized,
    K: Sink + ?Sized,
{
    let hits = collect_hits(source, search, throttle, keyword).await;
    if hits.is_empty() {
        info!("no videos found for {:?}", keyword);
        return 0;
    }

    info!("found {} videos, downloading audio", hits.len());

    let mut written = 0;
    for (index, hit) in hits.iter().enumerate() {
        throttle.wait().await;
        info!("[{}/{}] {}", index + 1, hits.len(), hit.title);

        let url = match source.resolve_audio_url(&hit.bvid).await {
            Ok(url) => url,
            Err(e) => {
                warn!("skipping {} ({}): {}", hit.title, hit.bvid, e);
                continue;
            }
        };

        match sink.save(&url, hit).await {
            Ok(path) => {
                info!("saved {}", path.display());
                written += 1;
            }
            Err(e) => warn!("download failed for {} ({}): {}", hit.title, hit.bvid, e),
        }
    }

    info!("done, {} of {} audio files written", written, hits.len());
    written
}

/// Pages through search results until `max_results` hits are collected, a
/// page comes back empty, or a page fails. A failed page ends pagination
/// with whatever was collected so far.
async fn collect_hits<S>(
    source: &S,
    search: &SearchConfig,
    throttle: &mut Throttle,
    keyword: &str,
) -> Vec<VideoHit>
where
    S: AudioSource + ?Sized,
{
    let mut hits: Vec<VideoHit> = Vec::new();
    let mut page = 1u32;

    while hits.len() < search.max_results {
        throttle.wait().await;
        info!("fetching page {} from {}", page, source.name());

        match source.search_page(keyword, page, search.page_size).await {
            Ok(batch) if batch.is_empty() => break,
            Ok(batch) => hits.extend(batch),
            Err(e) => {
                warn!("search page {} failed: {}", page, e);
                break;
            }
        }
        page += 1;
    }

    hits.truncate(search.max_results);
    hits
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::common::{Bvid, DownloadError, SourceError};

    fn hit(bvid: &str, title: &str) -> VideoHit {
        VideoHit {
            bvid: Bvid(bvid.to_string()),
            title: title.to_string(),
        }
    }

    fn page_of(prefix: &str, count: usize) -> Vec<VideoHit> {
        (0..count)
            .map(|i| hit(&format!("BV{}{}", prefix, i), &format!("{} {}", prefix, i)))
            .collect()
    }

    /// Serves canned pages; `repeat_last` makes the final page inexhaustible.
    struct StubSource {
        pages: Vec<Vec<VideoHit>>,
        repeat_last: bool,
        fail_resolve: HashSet<String>,
        search_calls: AtomicUsize,
    }

    impl StubSource {
        fn new(pages: Vec<Vec<VideoHit>>) -> Self {
            Self {
                pages,
                repeat_last: false,
                fail_resolve: HashSet::new(),
                search_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AudioSource for StubSource {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn search_page(
            &self,
            _keyword: &str,
            page: u32,
            _page_size: u32,
        ) -> Result<Vec<VideoHit>, SourceError> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            let index = (page as usize - 1).min(if self.repeat_last {
                self.pages.len().saturating_sub(1)
            } else {
                usize::MAX
            });
            Ok(self.pages.get(index).cloned().unwrap_or_default())
        }

        async fn resolve_audio_url(&self, bvid: &Bvid) -> Result<String, SourceError> {
            if self.fail_resolve.contains(&bvid.0) {
                return Err(SourceError::NoDash);
            }
            Ok(format!("https://cdn.example/{}.m4s", bvid))
        }
    }

    /// Records saves instead of touching the network or the filesystem.
    struct RecordingSink {
        saved: Mutex<Vec<(String, String)>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
            }
        }

        fn count(&self) -> usize {
            self.saved.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Sink for RecordingSink {
        async fn save(&self, url: &str, hit: &VideoHit) -> Result<PathBuf, DownloadError> {
            self.saved
                .lock()
                .unwrap()
                .push((url.to_string(), hit.title.clone()));
            Ok(PathBuf::from(format!("downloads/{}.mp3", hit.title)))
        }
    }

    fn fast_throttle() -> Throttle {
        Throttle::new(Duration::ZERO)
    }

    fn config(page_size: u32, max_results: usize) -> SearchConfig {
        SearchConfig {
            page_size,
            max_results,
        }
    }

    #[tokio::test]
    async fn test_zero_results_means_zero_downloads() {
        let source = StubSource::new(vec![]);
        let sink = RecordingSink::new();

        let written = run(&source, &sink, &config(20, 100), &mut fast_throttle(), "x").await;

        assert_eq!(written, 0);
        assert_eq!(sink.count(), 0);
        assert_eq!(source.search_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_pagination_stops_at_max_results() {
        let mut source = StubSource::new(vec![page_of("a", 20)]);
        source.repeat_last = true;
        let sink = RecordingSink::new();

        run(&source, &sink, &config(20, 100), &mut fast_throttle(), "x").await;

        // 100 / 20 pages, no fetch beyond the cap.
        assert_eq!(source.search_calls.load(Ordering::SeqCst), 5);
        assert_eq!(sink.count(), 100);
    }

    #[tokio::test]
    async fn test_pagination_stops_on_empty_page() {
        let source = StubSource::new(vec![page_of("a", 20), page_of("b", 20)]);
        let sink = RecordingSink::new();

        let written = run(&source, &sink, &config(20, 100), &mut fast_throttle(), "x").await;

        // Third call returns the empty page and ends pagination.
        assert_eq!(source.search_calls.load(Ordering::SeqCst), 3);
        assert_eq!(written, 40);
    }

    #[tokio::test]
    async fn test_short_final_page_is_kept() {
        let source = StubSource::new(vec![page_of("a", 20), page_of("b", 7)]);
        let sink = RecordingSink::new();

        let written = run(&source, &sink, &config(20, 100), &mut fast_throttle(), "x").await;

        assert_eq!(written, 27);
    }

    #[tokio::test]
    async fn test_resolve_failure_skips_item_and_continues() {
        let mut source = StubSource::new(vec![vec![
            hit("BVa0", "first"),
            hit("BVbad", "broken"),
            hit("BVa2", "third"),
        ]]);
        source.fail_resolve.insert("BVbad".to_string());
        let sink = RecordingSink::new();

        let written = run(&source, &sink, &config(20, 100), &mut fast_throttle(), "x").await;

        assert_eq!(written, 2);
        let saved = sink.saved.lock().unwrap();
        assert_eq!(saved.len(), 2);
        // The sink is never invoked for the unresolvable item.
        assert!(saved.iter().all(|(_, title)| title != "broken"));
    }

    #[tokio::test]
    async fn test_overfull_collection_is_truncated() {
        let source = StubSource::new(vec![page_of("a", 20), page_of("b", 20)]);
        let sink = RecordingSink::new();

        let written = run(&source, &sink, &config(20, 30), &mut fast_throttle(), "x").await;

        assert_eq!(written, 30);
    }
}
