//! Multi-format file parser
//!
//! Dispatches raw uploaded bytes to an off-the-shelf parser by file kind and
//! returns the extracted text as an ordered sequence of pages/slides. Nothing
//! here touches disk or shares state between calls.

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::types::FileType;

/// Parsed document with extracted text
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// File type
    pub file_type: FileType,
    /// Full extracted text
    pub content: String,
    /// Content hash, for spotting re-uploads of identical text
    pub content_hash: String,
    /// Total pages or slides (if the format has them)
    pub total_pages: Option<u32>,
    /// Per-page/per-slide content, in document order
    pub pages: Vec<PageContent>,
}

/// Content from a single page or slide
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Page or slide number (1-indexed), when known
    pub page_number: Option<u32>,
    /// Text content of the page
    pub content: String,
}

/// Multi-format file parser
pub struct FileParser;

impl FileParser {
    /// Parse a file based on its extension
    pub fn parse(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let file_type = FileType::from_filename(filename);

        if !file_type.is_supported() {
            return Err(Error::UnsupportedFileType(filename.to_string()));
        }

        match file_type {
            FileType::Pdf => Self::parse_pdf(filename, data),
            FileType::Txt => Self::parse_text(filename, data),
            FileType::Pptx => Self::parse_pptx(filename, data),
            FileType::Unknown => Err(Error::UnsupportedFileType(filename.to_string())),
        }
    }

    /// Parse a PDF document
    fn parse_pdf(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let raw = Self::extract_pdf_with_timeout(filename, data)?;

        // Null bytes and trailing per-line whitespace are extraction artifacts
        let content = raw
            .replace('\0', "")
            .lines()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n");

        if content.trim().is_empty() {
            return Err(Error::file_parse(
                filename,
                "no text content could be extracted from PDF",
            ));
        }

        // pdf-extract returns one text blob; lopdf still knows the page count
        let total_pages = lopdf::Document::load_mem(data)
            .ok()
            .map(|doc| doc.get_pages().len() as u32);

        let pages = vec![PageContent {
            page_number: None,
            content: content.clone(),
        }];

        Ok(ParsedDocument {
            file_type: FileType::Pdf,
            content_hash: hash_content(&content),
            content,
            total_pages,
            pages,
        })
    }

    /// Run pdf-extract on a watchdog thread.
    ///
    /// pdf-extract is known to hang on pathological embedded fonts; a bounded
    /// wait turns that into a per-file parse error instead of a stuck session.
    fn extract_pdf_with_timeout(filename: &str, data: &[u8]) -> Result<String> {
        use std::sync::mpsc;
        use std::thread;
        use std::time::Duration;

        let data_vec = data.to_vec();
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let result = pdf_extract::extract_text_from_mem(&data_vec);
            let _ = tx.send(result);
        });

        match rx.recv_timeout(Duration::from_secs(30)) {
            Ok(Ok(text)) => {
                let _ = handle.join();
                Ok(text)
            }
            Ok(Err(e)) => {
                let _ = handle.join();
                tracing::warn!("pdf-extract failed for {}: {}", filename, e);
                Err(Error::file_parse(filename, e.to_string()))
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                // The worker thread cannot be killed; abandon it
                tracing::error!("PDF extraction timed out for {}", filename);
                Err(Error::file_parse(filename, "PDF extraction timed out"))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                tracing::error!("PDF extraction thread crashed for {}", filename);
                Err(Error::file_parse(filename, "PDF extraction crashed"))
            }
        }
    }

    /// Parse plain text
    fn parse_text(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let content = String::from_utf8_lossy(data).to_string();

        if content.trim().is_empty() {
            return Err(Error::file_parse(filename, "file contains no text"));
        }

        let pages = vec![PageContent {
            page_number: None,
            content: content.clone(),
        }];

        Ok(ParsedDocument {
            file_type: FileType::Txt,
            content_hash: hash_content(&content),
            content,
            total_pages: None,
            pages,
        })
    }

    /// Parse a PowerPoint presentation (.pptx)
    fn parse_pptx(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let cursor = std::io::Cursor::new(data);
        let mut archive = zip::ZipArchive::new(cursor)
            .map_err(|e| Error::file_parse(filename, e.to_string()))?;

        let slide_names = Self::slide_entries(&archive);
        let slide_total = slide_names.len() as u32;

        let mut content = String::new();
        let mut pages = Vec::new();

        for (slide_number, slide_name) in slide_names.into_iter().enumerate() {
            let slide_number = slide_number as u32 + 1;

            let mut file = archive
                .by_name(&slide_name)
                .map_err(|e| Error::file_parse(filename, e.to_string()))?;
            let mut xml = String::new();
            std::io::Read::read_to_string(&mut file, &mut xml)
                .map_err(|e| Error::file_parse(filename, e.to_string()))?;

            let slide_text = Self::extract_slide_text(&xml);
            if slide_text.is_empty() {
                continue;
            }

            if !content.is_empty() {
                content.push('\n');
            }
            content.push_str(&slide_text);

            pages.push(PageContent {
                page_number: Some(slide_number),
                content: slide_text,
            });
        }

        if content.trim().is_empty() {
            return Err(Error::file_parse(
                filename,
                "presentation contains no extractable text",
            ));
        }

        Ok(ParsedDocument {
            file_type: FileType::Pptx,
            content_hash: hash_content(&content),
            content,
            total_pages: Some(slide_total),
            pages,
        })
    }

    /// Slide XML entries (ppt/slides/slideN.xml) sorted by slide number
    fn slide_entries<R: std::io::Read + std::io::Seek>(
        archive: &zip::ZipArchive<R>,
    ) -> Vec<String> {
        let mut names: Vec<String> = archive
            .file_names()
            .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
            .map(|s| s.to_string())
            .collect();

        names.sort_by_key(|name| {
            name.trim_start_matches("ppt/slides/slide")
                .trim_end_matches(".xml")
                .parse::<u32>()
                .unwrap_or(0)
        });

        names
    }

    /// Extract text from slide XML: one output line per `<a:p>` paragraph,
    /// with the paragraph's `<a:t>` runs joined by spaces.
    fn extract_slide_text(xml: &str) -> String {
        use quick_xml::events::Event;
        use quick_xml::Reader;

        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut lines: Vec<String> = Vec::new();
        let mut paragraph: Vec<String> = Vec::new();
        let mut in_text_run = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    if e.local_name().as_ref() == b"t" {
                        in_text_run = true;
                    }
                }
                Ok(Event::Text(e)) => {
                    if in_text_run {
                        if let Ok(text) = e.unescape() {
                            let text = text.trim().to_string();
                            if !text.is_empty() {
                                paragraph.push(text);
                            }
                        }
                    }
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"t" => in_text_run = false,
                    b"p" => {
                        if !paragraph.is_empty() {
                            lines.push(paragraph.join(" "));
                            paragraph.clear();
                        }
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(_) => break,
                _ => {}
            }
        }

        if !paragraph.is_empty() {
            lines.push(paragraph.join(" "));
        }

        lines.join("\n")
    }
}

/// Hash extracted text for re-upload detection
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
