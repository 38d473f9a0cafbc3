//! Integration tests for pdf-check

use pdf_check::pdf::PdfReader;
use pdf_check::runner::{builtin_checks, run_suite, CheckContext};
use pdf_check::Error;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

/// Strip whitespace so assertions hold regardless of how the extractor
/// spaces the recovered glyphs.
fn normalized(text: &str) -> String {
    text.split_whitespace().collect()
}

#[test]
fn test_sample_pdf_page_count() {
    let reader = PdfReader::open(fixture_path("sample.pdf")).expect("Failed to open sample.pdf");

    assert_eq!(reader.page_count(), 3);
}

#[test]
fn test_page_count_only_matches_full_open() {
    let path = fixture_path("sample.pdf");
    let full = PdfReader::open(&path).expect("Failed to open sample.pdf");
    let count_only =
        PdfReader::open_page_count_only(&path).expect("Failed to open sample.pdf");

    assert_eq!(full.page_count(), count_only.page_count());
}

#[test]
fn test_document_text_content() {
    let reader = PdfReader::open(fixture_path("sample.pdf")).expect("Failed to open sample.pdf");

    let text = reader.document_text();
    assert!(!text.is_empty(), "Document text should not be empty");
    assert_eq!(
        normalized(&text),
        "SamplereportpageoneSamplereportpagetwoSamplereportpagethree"
    );
}

#[test]
fn test_page_text_per_page() {
    let reader = PdfReader::open(fixture_path("sample.pdf")).expect("Failed to open sample.pdf");

    let page_two = reader.page_text(2).expect("Failed to get page 2 text");
    assert_eq!(normalized(page_two), "Samplereportpagetwo");
}

#[test]
fn test_page_text_out_of_bounds() {
    let reader = PdfReader::open(fixture_path("sample.pdf")).expect("Failed to open sample.pdf");

    let result = reader.page_text(9999);
    assert!(matches!(result, Err(Error::PageOutOfBounds { .. })));
}

#[test]
fn test_dummy_pdf_single_page() {
    let reader = PdfReader::open(fixture_path("dummy.pdf")).expect("Failed to open dummy.pdf");

    assert_eq!(reader.page_count(), 1);
    assert_eq!(normalized(&reader.document_text()), "DummyPDFfile");
}

#[test]
fn test_open_nonexistent_file() {
    let result = PdfReader::open("/nonexistent/path/file.pdf");
    assert!(matches!(result, Err(Error::PdfNotFound { .. })));
}

#[rstest]
#[case(b"not a valid PDF file".as_slice())]
#[case(b"%PD".as_slice())]
#[case(b"".as_slice())]
fn test_invalid_bytes_rejected(#[case] data: &[u8]) {
    let result = PdfReader::open_bytes(data);
    assert!(matches!(result, Err(Error::InvalidPdf { .. })));
}

// ============================================================================
// Full suite runs
// ============================================================================

#[test]
fn test_suite_passes_against_sample_fixture() {
    let ctx = CheckContext {
        document: fixture_path("sample.pdf"),
    };

    let mut out = Vec::new();
    let report = run_suite(&ctx, &builtin_checks(), &mut out);

    assert!(report.all_passed(), "report: {:?}", report);

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("has 3 pages"));
    assert!(output.contains("a: 111"));
    assert!(output.contains("b: 222"));
    assert!(output.contains("c: 333"));
}

#[test]
fn test_suite_isolates_failures_for_missing_document() {
    let ctx = CheckContext {
        document: PathBuf::from("/nonexistent/path/file.pdf"),
    };

    let mut out = Vec::new();
    let report = run_suite(&ctx, &builtin_checks(), &mut out);

    assert!(!report.all_passed());
    assert_eq!(report.outcomes.len(), 3);

    // Document checks fail, the mapping check still runs and passes
    assert_eq!(report.failed().len(), 2);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("a: 111"));
}
