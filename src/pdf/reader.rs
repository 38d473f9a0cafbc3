//! PDF reader wrapper for PDFium

use crate::error::{Error, Result};
use pdfium_render::prelude::*;
use std::path::Path;

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to system library or use static linking
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

/// PDF reader using PDFium
///
/// Page text is extracted eagerly on open so that later accessors never
/// touch the engine again.
pub struct PdfReader {
    page_count: u32,
    page_texts: Vec<String>,
}

impl PdfReader {
    /// Open a PDF from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = read_pdf_file(path)?;
        Self::open_bytes(&data)
    }

    /// Open a PDF from bytes
    pub fn open_bytes(data: &[u8]) -> Result<Self> {
        validate_header(data)?;

        let pdfium = create_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(map_pdfium_error)?;

        let page_count = document.pages().len() as u32;
        let page_texts = Self::extract_all_page_texts(&document)?;

        Ok(Self {
            page_count,
            page_texts,
        })
    }

    /// Open a PDF from a file path, reading only the page count (no text
    /// extraction for performance)
    pub fn open_page_count_only<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = read_pdf_file(path)?;
        Self::open_bytes_page_count_only(&data)
    }

    /// Open a PDF from bytes, reading only the page count
    pub fn open_bytes_page_count_only(data: &[u8]) -> Result<Self> {
        validate_header(data)?;

        let pdfium = create_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(map_pdfium_error)?;

        let page_count = document.pages().len() as u32;

        Ok(Self {
            page_count,
            page_texts: Vec::new(), // Skip text extraction
        })
    }

    /// Get the number of pages
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Extract text from a specific page (1-indexed)
    pub fn page_text(&self, page_num: u32) -> Result<&str> {
        if page_num < 1 || page_num > self.page_count {
            return Err(Error::PageOutOfBounds {
                page: page_num,
                total: self.page_count,
            });
        }

        Ok(&self.page_texts[(page_num - 1) as usize])
    }

    /// Full text content of the document as a single string.
    /// Pages are joined by blank lines; pages without text are skipped.
    pub fn document_text(&self) -> String {
        self.page_texts
            .iter()
            .filter(|text| !text.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn extract_all_page_texts(document: &PdfDocument) -> Result<Vec<String>> {
        let pages = document.pages();
        let page_len = pages.len() as usize;
        let mut texts = Vec::with_capacity(page_len);

        for index in 0..pages.len() {
            let page = pages.get(index).map_err(|e| Error::Pdfium {
                reason: format!("Failed to get page {}: {}", index + 1, e),
            })?;

            let text = Self::extract_page_text_with_layout(&page)?;
            texts.push(text);
        }

        Ok(texts)
    }

    /// Extract text from a page with Y-coordinate based ordering (preserves reading order)
    fn extract_page_text_with_layout(page: &PdfPage) -> Result<String> {
        let text_obj = match page.text() {
            Ok(t) => t,
            Err(_) => return Ok(String::new()),
        };

        // Collect all characters with their positions
        let mut chars_with_pos: Vec<(char, f32, f32)> = Vec::new();

        for segment in text_obj.segments().iter() {
            if let Ok(chars) = segment.chars() {
                for char_result in chars.iter() {
                    if let Some(c) = char_result.unicode_char() {
                        if let Ok(bounds) = char_result.loose_bounds() {
                            let x = bounds.left().value;
                            let y = bounds.top().value;
                            chars_with_pos.push((c, x, y));
                        }
                    }
                }
            }
        }

        if chars_with_pos.is_empty() {
            return Ok(String::new());
        }

        // Tolerance of ~5 points accounts for slight vertical variations within a line
        const Y_TOLERANCE: f32 = 5.0;

        // Sort by Y descending (top to bottom in PDF coordinates), then X ascending
        chars_with_pos.sort_by(|a, b| {
            let y_cmp = b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal);
            if y_cmp == std::cmp::Ordering::Equal {
                a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal)
            } else {
                y_cmp
            }
        });

        // Group into lines based on Y-coordinate proximity
        let mut lines: Vec<Vec<(char, f32)>> = Vec::new();
        let mut current_line: Vec<(char, f32)> = Vec::new();
        let mut current_y: Option<f32> = None;

        for (c, x, y) in chars_with_pos {
            match current_y {
                Some(cur_y) if (cur_y - y).abs() <= Y_TOLERANCE => {
                    current_line.push((c, x));
                }
                _ => {
                    if !current_line.is_empty() {
                        lines.push(current_line);
                    }
                    current_line = vec![(c, x)];
                    current_y = Some(y);
                }
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }

        // Sort each line by X coordinate (left to right) and build the text
        let mut result = String::new();
        for mut line in lines {
            line.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

            // Add space between characters if there's a gap (word separation)
            let mut prev_x: Option<f32> = None;
            const SPACE_THRESHOLD: f32 = 10.0;

            for (c, x) in line {
                if let Some(px) = prev_x {
                    if x - px > SPACE_THRESHOLD && c != ' ' {
                        result.push(' ');
                    }
                }
                result.push(c);
                prev_x = Some(x);
            }

            result.push('\n');
        }

        Ok(result.trim_end().to_string())
    }
}

/// Read a PDF file from disk, verifying existence first
fn read_pdf_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }

    Ok(std::fs::read(path)?)
}

/// Reject data without a PDF header before handing it to PDFium
fn validate_header(data: &[u8]) -> Result<()> {
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }

    Ok(())
}

/// Map PDFium errors to our error type
fn map_pdfium_error(err: PdfiumError) -> Error {
    match err {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            Error::PasswordRequired
        }
        _ => Error::Pdfium {
            reason: format!("{}", err),
        },
    }
}
