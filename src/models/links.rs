// file: src/models/links.rs
// description: pair of download links derived from one video identifier
// reference: built by the link synthesizer, consumed by the document model

use crate::links::{audio_download_link, video_download_link};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLinks {
    pub audio: String,
    pub video: String,
}

impl DownloadLinks {
    /// Both links, or `None` if either template could not be applied.
    pub fn synthesize(video_id: Option<&str>) -> Option<Self> {
        let audio = audio_download_link(video_id)?;
        let video = video_download_link(video_id)?;
        Some(Self { audio, video })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_pair() {
        let links = DownloadLinks::synthesize(Some("XYZ987")).unwrap();
        assert_eq!(links.audio, "https://mp3-convert.org/en1/?v=XYZ987");
        assert_eq!(
            links.video,
            "https://www.keepvid.to/317?url=https://www.youtube.com/watch?v=XYZ987"
        );
    }

    #[test]
    fn test_synthesize_without_id() {
        assert!(DownloadLinks::synthesize(None).is_none());
        assert!(DownloadLinks::synthesize(Some("")).is_none());
    }
}
