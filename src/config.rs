//! Runtime configuration for the check runner

use clap::Parser;
use std::path::PathBuf;

/// Command-line configuration for pdf-check
///
/// The document path is the suite's single external input. It is taken
/// from the command line, falling back to the `PDF_CHECK_DOCUMENT`
/// environment variable when no argument is given.
#[derive(Debug, Parser)]
#[command(
    name = "pdf-check",
    version,
    about = "Runs console checks against a PDF document"
)]
pub struct RunConfig {
    /// Path to the PDF document the checks run against
    #[arg(env = "PDF_CHECK_DOCUMENT")]
    pub document: PathBuf,
}
