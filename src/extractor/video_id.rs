// file: src/extractor/video_id.rs
// description: video identifier extraction from youtube watch and short links
// reference: https://docs.rs/url

use crate::error::{PipelineError, Result};
use tracing::error;
use url::Url;

const RECOGNIZED_HOSTS: [&str; 4] = ["youtu.be", "www.youtu.be", "youtube.com", "www.youtube.com"];
const WATCH_PATH: &str = "/watch";
const VIDEO_PARAM: &str = "v";

pub fn is_recognized_host(host: &str) -> bool {
    RECOGNIZED_HOSTS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(host))
}

/// Parses `link` into a video identifier.
///
/// `Ok(None)` means the link is not a recognized video link (foreign host or
/// empty short-link path). A watch link without a `v` parameter and an
/// unparseable link are errors.
pub fn try_extract_video_id(link: &str) -> Result<Option<String>> {
    let url = Url::parse(link)
        .map_err(|e| PipelineError::Extraction(format!("cannot parse '{}': {}", link, e)))?;

    let Some(host) = url.host_str() else {
        return Ok(None);
    };

    if !is_recognized_host(host) {
        return Ok(None);
    }

    let video_id = if url.path() == WATCH_PATH {
        url.query_pairs()
            .find(|(key, value)| key == VIDEO_PARAM && !value.is_empty())
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| {
                PipelineError::Extraction(format!(
                    "missing '{}' query parameter in '{}'",
                    VIDEO_PARAM, link
                ))
            })?
    } else {
        url.path().trim_start_matches('/').to_string()
    };

    if video_id.is_empty() {
        return Ok(None);
    }

    Ok(Some(video_id))
}

/// Like [`try_extract_video_id`], but failures are logged and reported as absent.
pub fn extract_video_id(link: &str) -> Option<String> {
    match try_extract_video_id(link) {
        Ok(video_id) => video_id,
        Err(e) => {
            error!("An error occurred while extracting video ID: {}", e);
            None
        }
    }
}
