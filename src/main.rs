use std::io::Write;
use std::time::Duration;

use tracing::{info, warn};

use bilifetch::common::{http, logger};
use bilifetch::configs::Config;
use bilifetch::download::Downloader;
use bilifetch::pipeline;
use bilifetch::sources::BilibiliSource;
use bilifetch::throttle::Throttle;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::load()?;
    logger::init(&config);

    let cookie = config.bilibili.cookie();
    if cookie.is_none() {
        warn!("no cookie configured, search results and stream quality may be limited");
    }

    let client = http::build_client(cookie.as_deref())?;
    let source = BilibiliSource::new(client.clone());
    let downloader = Downloader::new(client, config.download.output_dir.as_str());
    let mut throttle = Throttle::new(Duration::from_millis(config.throttle.request_interval_ms));

    print!("search keyword: ");
    std::io::stdout().flush()?;
    let mut keyword = String::new();
    std::io::stdin().read_line(&mut keyword)?;
    let keyword = keyword.trim();
    if keyword.is_empty() {
        info!("empty keyword, nothing to do");
        return Ok(());
    }

    pipeline::run(&source, &downloader, &config.search, &mut throttle, keyword).await;

    Ok(())
}
