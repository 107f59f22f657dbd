//! Data models for export records.
//!
//! - [`IssueRow`]: the four meaningful fields of one export record

mod row;

pub use row::IssueRow;
