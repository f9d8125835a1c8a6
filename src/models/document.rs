// file: src/models/document.rs
// description: in-memory output document built from processed lines
// reference: internal data structures

use crate::models::DownloadLinks;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Normal,
    BodyText,
}

impl ParagraphStyle {
    /// Style id as referenced from `word/styles.xml`, `None` for the default style.
    pub fn style_id(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::BodyText => Some("BodyText"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(style: ParagraphStyle, runs: Vec<Run>) -> Self {
        Self { style, runs }
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// One processed input line and the links generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub line: String,
    pub links: DownloadLinks,
}

impl DocumentEntry {
    pub fn new(line: impl Into<String>, links: DownloadLinks) -> Self {
        Self {
            line: line.into(),
            links,
        }
    }

    /// Bold line label, then italic-labelled audio and video paragraphs.
    pub fn paragraphs(&self) -> [Paragraph; 3] {
        [
            Paragraph::new(ParagraphStyle::Normal, vec![Run::bold(self.line.clone())]),
            Paragraph::new(
                ParagraphStyle::BodyText,
                vec![Run::italic("Audio: "), Run::plain(self.links.audio.clone())],
            ),
            Paragraph::new(
                ParagraphStyle::BodyText,
                vec![Run::italic("Video: "), Run::plain(self.links.video.clone())],
            ),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct OutputDocument {
    entries: Vec<DocumentEntry>,
    pub created_at: DateTime<Utc>,
}

impl OutputDocument {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn append(&mut self, entry: DocumentEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = Paragraph> + '_ {
        self.entries.iter().flat_map(|entry| entry.paragraphs())
    }
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}
