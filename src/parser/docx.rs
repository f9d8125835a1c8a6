// file: src/parser/docx.rs
// description: extracts top-level paragraph text from a docx container
// reference: https://docs.rs/roxmltree

use crate::error::{PipelineError, Result};
use roxmltree::{Document, Node};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";
const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub struct DocxParagraphReader;

impl DocxParagraphReader {
    pub fn read(path: &Path) -> Result<Vec<String>> {
        let file = File::open(path).map_err(|source| PipelineError::file(path, source))?;
        let mut archive = ZipArchive::new(file)?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)?
            .read_to_string(&mut xml)
            .map_err(|source| PipelineError::file(path, source))?;

        Self::paragraph_texts(&xml)
    }

    /// Text of each direct `w:body/w:p` child; tables and anything nested
    /// inside them are not included.
    pub fn paragraph_texts(document_xml: &str) -> Result<Vec<String>> {
        let doc = Document::parse(document_xml)
            .map_err(|e| PipelineError::Xml(format!("{}: {}", DOCUMENT_PART, e)))?;

        let Some(body) = doc
            .root_element()
            .children()
            .find(|n| n.has_tag_name((WORDPROCESSING_NS, "body")))
        else {
            return Err(PipelineError::Xml(format!(
                "{}: missing w:body element",
                DOCUMENT_PART
            )));
        };

        Ok(body
            .children()
            .filter(|n| n.has_tag_name((WORDPROCESSING_NS, "p")))
            .map(Self::paragraph_text)
            .collect())
    }

    fn paragraph_text(paragraph: Node) -> String {
        let mut text = String::new();
        for node in paragraph
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().namespace() == Some(WORDPROCESSING_NS))
        {
            match node.tag_name().name() {
                "t" => text.push_str(node.text().unwrap_or_default()),
                "tab" => text.push('\t'),
                "br" | "cr" => text.push('\n'),
                _ => {}
            }
        }
        text
    }
}
