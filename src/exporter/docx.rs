// file: src/exporter/docx.rs
// description: persists the output document as a WordprocessingML package
// reference: https://docs.rs/zip

use crate::error::{PipelineError, Result};
use crate::models::{OutputDocument, Paragraph, Run};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::Path;
use tracing::info;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="22"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style><w:style w:type="paragraph" w:styleId="BodyText"><w:name w:val="Body Text"/><w:basedOn w:val="Normal"/><w:pPr><w:spacing w:after="120"/></w:pPr></w:style></w:styles>"#;

const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub struct DocxWriter;

impl DocxWriter {
    pub fn save(document: &OutputDocument, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| PipelineError::file(path, source))?;
        let mut archive = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("_rels/.rels", PACKAGE_RELS.to_string()),
            ("docProps/core.xml", Self::core_properties_xml(document)),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS.to_string()),
            ("word/styles.xml", STYLES.to_string()),
            ("word/document.xml", Self::document_xml(document)?),
        ];

        for (name, content) in parts {
            archive.start_file(name, options)?;
            archive
                .write_all(content.as_bytes())
                .map_err(|source| PipelineError::file(path, source))?;
        }

        archive.finish()?;

        info!(
            "Saved {} entries to {}",
            document.len(),
            path.display()
        );
        Ok(())
    }

    pub fn document_xml(document: &OutputDocument) -> Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        Self::write_document(&mut writer, document)
            .map_err(|e| PipelineError::Xml(format!("writing word/document.xml: {}", e)))?;

        String::from_utf8(writer.into_inner().into_inner())
            .map_err(|e| PipelineError::Xml(format!("word/document.xml is not UTF-8: {}", e)))
    }

    fn write_document<W: Write>(writer: &mut Writer<W>, document: &OutputDocument) -> io::Result<()> {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        writer.write_event(Event::Start(
            BytesStart::new("w:document").with_attributes([("xmlns:w", WORDPROCESSING_NS)]),
        ))?;
        writer.write_event(Event::Start(BytesStart::new("w:body")))?;

        for paragraph in document.paragraphs() {
            Self::write_paragraph(writer, &paragraph)?;
        }

        Self::write_section_properties(writer)?;

        writer.write_event(Event::End(BytesEnd::new("w:body")))?;
        writer.write_event(Event::End(BytesEnd::new("w:document")))?;
        Ok(())
    }

    fn write_paragraph<W: Write>(writer: &mut Writer<W>, paragraph: &Paragraph) -> io::Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:p")))?;

        if let Some(style_id) = paragraph.style.style_id() {
            writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
            writer.write_event(Event::Empty(
                BytesStart::new("w:pStyle").with_attributes([("w:val", style_id)]),
            ))?;
            writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        }

        for run in &paragraph.runs {
            Self::write_run(writer, run)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:p")))?;
        Ok(())
    }

    fn write_run<W: Write>(writer: &mut Writer<W>, run: &Run) -> io::Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:r")))?;

        if run.bold || run.italic {
            writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
            if run.bold {
                writer.write_event(Event::Empty(BytesStart::new("w:b")))?;
            }
            if run.italic {
                writer.write_event(Event::Empty(BytesStart::new("w:i")))?;
            }
            writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        }

        writer.write_event(Event::Start(
            BytesStart::new("w:t").with_attributes([("xml:space", "preserve")]),
        ))?;
        writer.write_event(Event::Text(BytesText::new(&run.text)))?;
        writer.write_event(Event::End(BytesEnd::new("w:t")))?;

        writer.write_event(Event::End(BytesEnd::new("w:r")))?;
        Ok(())
    }

    /// US Letter page with one-inch margins.
    fn write_section_properties<W: Write>(writer: &mut Writer<W>) -> io::Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:sectPr")))?;
        writer.write_event(Event::Empty(
            BytesStart::new("w:pgSz").with_attributes([("w:w", "12240"), ("w:h", "15840")]),
        ))?;
        writer.write_event(Event::Empty(BytesStart::new("w:pgMar").with_attributes([
            ("w:top", "1440"),
            ("w:right", "1440"),
            ("w:bottom", "1440"),
            ("w:left", "1440"),
            ("w:header", "720"),
            ("w:footer", "720"),
            ("w:gutter", "0"),
        ])))?;
        writer.write_event(Event::End(BytesEnd::new("w:sectPr")))?;
        Ok(())
    }

    fn core_properties_xml(document: &OutputDocument) -> String {
        let created = document.created_at.format("%Y-%m-%dT%H:%M:%SZ");
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:creator>linksync</dc:creator><dcterms:created xsi:type="dcterms:W3CDTF">{created}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{created}</dcterms:modified></cp:coreProperties>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentEntry, DownloadLinks};
    use crate::parser::DocxParagraphReader;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_document() -> OutputDocument {
        let mut document = OutputDocument::new();
        document.append(DocumentEntry::new(
            "song title",
            DownloadLinks::synthesize(Some("XYZ987")).unwrap(),
        ));
        document.append(DocumentEntry::new(
            "Salt & Pepper <live>",
            DownloadLinks::synthesize(Some("abc_DEF-12")).unwrap(),
        ));
        document
    }

    #[test]
    fn test_round_trip_paragraph_texts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("links.docx");

        DocxWriter::save(&sample_document(), &path).unwrap();
        let paragraphs = DocxParagraphReader::read(&path).unwrap();

        assert_eq!(
            paragraphs,
            vec![
                "song title",
                "Audio: https://mp3-convert.org/en1/?v=XYZ987",
                "Video: https://www.keepvid.to/317?url=https://www.youtube.com/watch?v=XYZ987",
                "Salt & Pepper <live>",
                "Audio: https://mp3-convert.org/en1/?v=abc_DEF-12",
                "Video: https://www.keepvid.to/317?url=https://www.youtube.com/watch?v=abc_DEF-12",
            ]
        );
    }

    #[test]
    fn test_run_formatting() {
        let xml = DocxWriter::document_xml(&sample_document()).unwrap();

        assert!(xml.contains(
            r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">song title</w:t></w:r></w:p>"#
        ));
        assert!(xml.contains(
            r#"<w:pPr><w:pStyle w:val="BodyText"/></w:pPr><w:r><w:rPr><w:i/></w:rPr><w:t xml:space="preserve">Audio: </w:t></w:r>"#
        ));
        assert!(xml.contains("Salt &amp; Pepper &lt;live&gt;"));
    }

    #[test]
    fn test_empty_document_is_valid_package() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.docx");

        DocxWriter::save(&OutputDocument::new(), &path).unwrap();
        assert!(DocxParagraphReader::read(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_parent_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("out.docx");

        let err = DocxWriter::save(&OutputDocument::new(), &path).unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }
}
