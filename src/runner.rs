//! Check suite runner
//!
//! Runs the built-in checks sequentially against one PDF document. A
//! failing check is recorded and never prevents the checks after it from
//! running; the suite passes only when every check passes.

use crate::error::Result;
use crate::fixtures;
use crate::pdf::PdfReader;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Read-only input shared by all checks
#[derive(Debug, Clone)]
pub struct CheckContext {
    /// Path to the PDF document under check
    pub document: PathBuf,
}

/// A named check run against the context.
/// The check body writes its report lines to `out`.
pub struct Check {
    /// Check name, used in logs and the summary
    pub name: &'static str,
    pub run: fn(&CheckContext, &mut dyn Write) -> Result<()>,
}

/// Outcome of a single check
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    /// Failure message, if the check failed
    pub error: Option<String>,
    pub duration: Duration,
}

impl CheckOutcome {
    /// True when the check completed without error
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of a full suite run
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    /// True when every check passed
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// Outcomes of the checks that failed
    pub fn failed(&self) -> Vec<&CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed()).collect()
    }

    /// Write a one-line-per-check summary followed by the overall verdict
    pub fn write_summary(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out)?;
        for outcome in &self.outcomes {
            match &outcome.error {
                None => writeln!(out, "PASS  {} ({:?})", outcome.name, outcome.duration)?,
                Some(error) => writeln!(out, "FAIL  {}: {}", outcome.name, error)?,
            }
        }

        let failed = self.failed().len();
        if failed == 0 {
            writeln!(out, "{} checks passed", self.outcomes.len())?;
        } else {
            writeln!(out, "{} of {} checks failed", failed, self.outcomes.len())?;
        }

        Ok(())
    }
}

/// Run every check in order against the context.
///
/// Check failures are isolated: each failure is recorded in the report and
/// the runner moves on to the next check.
pub fn run_suite(ctx: &CheckContext, checks: &[Check], out: &mut dyn Write) -> SuiteReport {
    let mut report = SuiteReport::default();

    for check in checks {
        tracing::info!(check = check.name, "running check");
        let started = Instant::now();
        let result = (check.run)(ctx, out);
        let duration = started.elapsed();

        let error = match result {
            Ok(()) => {
                tracing::info!(check = check.name, ?duration, "check passed");
                None
            }
            Err(e) => {
                tracing::warn!(check = check.name, error = %e, "check failed");
                Some(e.to_string())
            }
        };

        report.outcomes.push(CheckOutcome {
            name: check.name,
            error,
            duration,
        });
    }

    report
}

/// The built-in checks, in execution order
pub fn builtin_checks() -> Vec<Check> {
    vec![
        Check {
            name: "page-count",
            run: check_page_count,
        },
        Check {
            name: "extract-text",
            run: check_extract_text,
        },
        Check {
            name: "log-mapping",
            run: check_log_mapping,
        },
    ]
}

/// Report the number of pages in the document
fn check_page_count(ctx: &CheckContext, out: &mut dyn Write) -> Result<()> {
    let reader = PdfReader::open_page_count_only(&ctx.document)?;
    writeln!(
        out,
        "{} has {} pages",
        ctx.document.display(),
        reader.page_count()
    )?;

    Ok(())
}

/// Report the document's full text content as a single block
fn check_extract_text(ctx: &CheckContext, out: &mut dyn Write) -> Result<()> {
    let reader = PdfReader::open(&ctx.document)?;
    writeln!(out, "{}", reader.document_text())?;

    Ok(())
}

/// Enumerate the sample mapping in insertion order, then dump it whole
fn check_log_mapping(_ctx: &CheckContext, out: &mut dyn Write) -> Result<()> {
    let mapping = fixtures::sample_mapping();

    for (key, value) in &mapping {
        writeln!(out, "{}: {}", key, value)?;
    }

    writeln!(out, "{}", serde_json::to_string_pretty(&mapping)?)?;

    Ok(())
}
