use tracing::debug;

use super::{BilibiliSource, PLAYURL_URL, VIEW_URL, parser};
use crate::common::{Bvid, Cid, SourceError};

impl BilibiliSource {
    /// Resolves the public identifier to the numeric identifier of the
    /// video's primary part.
    pub async fn resolve_cid(&self, bvid: &Bvid) -> Result<Cid, SourceError> {
        let query = [("bvid", bvid.to_string())];
        let body = self
            .get_json(VIEW_URL, &query, Some(Self::video_referer(bvid)))
            .await?;
        parser::parse_cid(&body)
    }

    /// Two-step lookup: bvid -> cid -> first DASH audio track URL.
    pub(super) async fn resolve_audio_url_raw(&self, bvid: &Bvid) -> Result<String, SourceError> {
        let cid = self.resolve_cid(bvid).await?;
        debug!("{} resolved to cid {}", bvid, cid);

        let query = [
            ("bvid", bvid.to_string()),
            ("cid", cid.to_string()),
            // qn=0 requests automatic quality selection.
            ("qn", "0".to_string()),
            // fnval=16 requests the DASH manifest instead of the flat format.
            ("fnval", "16".to_string()),
        ];

        let body = self
            .get_json(PLAYURL_URL, &query, Some(Self::video_referer(bvid)))
            .await?;
        parser::parse_audio_url(&body)
    }
}
