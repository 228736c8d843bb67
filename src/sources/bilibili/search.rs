use tracing::debug;

use super::{BilibiliSource, SEARCH_URL, parser};
use crate::common::{SourceError, VideoHit};

impl BilibiliSource {
    /// One page of keyword search. The keyword is sent as-is; the platform
    /// handles CJK and whitespace server-side.
    pub(super) async fn search_page_raw(
        &self,
        keyword: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<VideoHit>, SourceError> {
        debug!("searching {:?} page {} (size {})", keyword, page, page_size);

        let query = [
            ("keyword", keyword.to_string()),
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];

        let body = self.get_json(SEARCH_URL, &query, None).await?;
        parser::parse_search_hits(&body)
    }
}
