//! PDF processing layer
//!
//! This module provides PDF processing functionality using PDFium.

mod reader;

pub use reader::PdfReader;
