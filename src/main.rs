//! pdf-check - Entry point
//!
//! A console check runner for PDF documents.

use clap::Parser;
use pdf_check::{builtin_checks, run_suite, CheckContext, RunConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunConfig::parse();
    tracing::info!(document = %config.document.display(), "Starting PDF check suite");

    let ctx = CheckContext {
        document: config.document,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = run_suite(&ctx, &builtin_checks(), &mut out);
    report.write_summary(&mut out)?;

    if !report.all_passed() {
        anyhow::bail!(
            "{} of {} checks failed",
            report.failed().len(),
            report.outcomes.len()
        );
    }

    Ok(())
}
