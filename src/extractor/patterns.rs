// file: src/extractor/patterns.rs
// description: compiled regex patterns for search result pages
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Search results page
    pub static ref YT_INITIAL_DATA: Regex = Regex::new(
        r#"(?s)(?:var\s+ytInitialData|window\["ytInitialData"\])\s*=\s*(\{.*?\});\s*</script>"#
    ).expect("YT_INITIAL_DATA regex is valid");

    pub static ref VIDEO_ID: Regex = Regex::new(
        r"^[A-Za-z0-9_-]{6,}$"
    ).expect("VIDEO_ID regex is valid");
}

pub fn is_plausible_video_id(candidate: &str) -> bool {
    VIDEO_ID.is_match(candidate)
}
