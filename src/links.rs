// file: src/links.rs
// description: fixed download-mirror url templates keyed by video identifier
// reference: audio and video conversion mirrors

const AUDIO_MIRROR: &str = "https://mp3-convert.org/en1/?v=";
const VIDEO_MIRROR: &str = "https://www.keepvid.to/317?url=https://www.youtube.com/watch?v=";

/// Audio-conversion mirror link; an absent or empty identifier yields no link.
pub fn audio_download_link(video_id: Option<&str>) -> Option<String> {
    video_id
        .filter(|id| !id.is_empty())
        .map(|id| format!("{AUDIO_MIRROR}{id}"))
}

/// Video-conversion mirror link; an absent or empty identifier yields no link.
pub fn video_download_link(video_id: Option<&str>) -> Option<String> {
    video_id
        .filter(|id| !id.is_empty())
        .map(|id| format!("{VIDEO_MIRROR}{id}"))
}
