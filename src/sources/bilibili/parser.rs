use serde_json::Value;

use crate::common::{Bvid, Cid, SourceError, VideoHit};

/// Enforces the response-level status code the platform wraps every payload
/// in. Non-zero codes carry a server-provided message.
pub fn ensure_ok(body: &Value) -> Result<(), SourceError> {
    let code = body
        .get("code")
        .and_then(Value::as_i64)
        .ok_or(SourceError::Shape("code"))?;
    if code != 0 {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        return Err(SourceError::Api { code, message });
    }
    Ok(())
}

/// Extracts video entries from a search response: scans result groups in
/// server order and takes the contents of the first group tagged "video".
/// No such group, or a missing group list, means the result set is empty.
pub fn parse_search_hits(body: &Value) -> Result<Vec<VideoHit>, SourceError> {
    ensure_ok(body)?;

    let data = body.get("data").ok_or(SourceError::Shape("data"))?;
    let Some(groups) = data.get("result").and_then(Value::as_array) else {
        // Zero-hit searches come back without a result list.
        return Ok(Vec::new());
    };

    let videos = groups
        .iter()
        .find(|group| group.get("result_type").and_then(Value::as_str) == Some("video"))
        .and_then(|group| group.get("data"))
        .and_then(Value::as_array);

    match videos {
        Some(videos) => Ok(videos.iter().filter_map(parse_hit).collect()),
        None => Ok(Vec::new()),
    }
}

fn parse_hit(item: &Value) -> Option<VideoHit> {
    let bvid = item.get("bvid")?.as_str()?;
    if bvid.is_empty() {
        return None;
    }
    let title = item.get("title")?.as_str()?;
    Some(VideoHit {
        bvid: Bvid(bvid.to_string()),
        title: clean_title(title),
    })
}

/// Extracts the primary part identifier from a view response.
pub fn parse_cid(body: &Value) -> Result<Cid, SourceError> {
    ensure_ok(body)?;
    body.get("data")
        .and_then(|d| d.get("cid"))
        .and_then(Value::as_u64)
        .map(Cid)
        .ok_or(SourceError::Shape("data.cid"))
}

/// Extracts the first audio track URL from a playurl response. A response
/// without a dash section is the legacy flat format and is rejected.
pub fn parse_audio_url(body: &Value) -> Result<String, SourceError> {
    ensure_ok(body)?;

    let data = body.get("data").ok_or(SourceError::Shape("data"))?;
    let dash = match data.get("dash") {
        Some(dash) if !dash.is_null() => dash,
        _ => return Err(SourceError::NoDash),
    };

    let audio = dash
        .get("audio")
        .and_then(Value::as_array)
        .filter(|tracks| !tracks.is_empty())
        .ok_or(SourceError::NoAudioTrack)?;

    // The API emits both spellings depending on endpoint version.
    audio[0]
        .get("base_url")
        .or_else(|| audio[0].get("baseUrl"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(SourceError::Shape("dash.audio[0].base_url"))
}

/// Strips the search highlight markup and unescapes the HTML entities the
/// platform embeds in titles. `&amp;` is handled last so pre-escaped
/// entities do not unescape twice.
pub fn clean_title(raw: &str) -> String {
    raw.replace("<em class=\"keyword\">", "")
        .replace("</em>", "")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
