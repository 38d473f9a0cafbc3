//! pdf-check Library
//!
//! This crate provides console checks run against a PDF document:
//! - `page-count`: report the number of pages
//! - `extract-text`: report the document's full text content
//! - `log-mapping`: enumerate the sample mapping and dump it whole

pub mod config;
pub mod error;
pub mod fixtures;
pub mod pdf;
pub mod runner;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use runner::{builtin_checks, run_suite, Check, CheckContext, CheckOutcome, SuiteReport};
