//! # Tally - a CLI toolkit for crunching issue-tracker CSV exports
//!
//! Tally reads a Mantis-style CSV export on standard input, digs the
//! estimated-hours annotation (e.g. `(7.5 h)`) out of each summary field,
//! and emits a condensed table plus a running total.
//!
//! ## Quick Start
//!
//! ```bash
//! # Aggregate estimated hours from a CSV export
//! tally hours < export.csv
//!
//! # Save the aggregation as JSON and display it again later
//! tally hours --save-report report.json < export.csv
//! tally report report.json
//!
//! # Classify identifiers by typing hand
//! find src -name '*.java' | tally hands
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`error`]: Error types and result aliases
//! - [`extract`]: Hours extraction from summary text
//! - [`hands`]: QWERTY hand classification of identifiers
//! - [`model`]: Data models (IssueRow)
//! - [`report`]: Aggregation and report serialization

/// Command-line interface definitions using clap.
pub mod cli;

/// Error types and result aliases.
///
/// Defines the `TallyError` enum and `Result<T>` type alias.
pub mod error;

/// Hours extraction from free-text summary fields.
pub mod extract;

/// QWERTY hand classification of identifiers.
pub mod hands;

/// Data models for export records.
pub mod model;

/// Aggregation over CSV exports and report serialization.
pub mod report;

pub mod logging;
