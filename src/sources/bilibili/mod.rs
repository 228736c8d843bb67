mod parser;
mod resolve;
mod search;

use async_trait::async_trait;
use reqwest::header::REFERER;
use serde_json::Value;

use crate::common::{Bvid, SourceError, VideoHit};
use crate::sources::AudioSource;

const SEARCH_URL: &str = "https://api.bilibili.com/x/web-interface/search/all/v2";
const VIEW_URL: &str = "https://api.bilibili.com/x/web-interface/view";
const PLAYURL_URL: &str = "https://api.bilibili.com/x/player/playurl";

pub struct BilibiliSource {
    client: reqwest::Client,
}

impl BilibiliSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn video_referer(bvid: &Bvid) -> String {
        format!("https://www.bilibili.com/video/{}", bvid)
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        referer: Option<String>,
    ) -> Result<Value, SourceError> {
        let mut request = self.client.get(url).query(query);
        if let Some(referer) = referer {
            request = request.header(REFERER, referer);
        }
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl AudioSource for BilibiliSource {
    fn name(&self) -> &'static str {
        "bilibili"
    }

    async fn search_page(
        &self,
        keyword: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<VideoHit>, SourceError> {
        self.search_page_raw(keyword, page, page_size).await
    }

    async fn resolve_audio_url(&self, bvid: &Bvid) -> Result<String, SourceError> {
        self.resolve_audio_url_raw(bvid).await
    }
}
