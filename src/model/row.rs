use crate::error::{Result, TallyError};
use csv::StringRecord;

/// Zero-based offset of the issue id in an export record.
pub const COLUMN_ID: usize = 0;
/// Zero-based offset of the assignee.
pub const COLUMN_ASSIGNEE: usize = 3;
/// Zero-based offset of the priority.
pub const COLUMN_PRIORITY: usize = 4;
/// Zero-based offset of the free-text summary.
pub const COLUMN_SUMMARY: usize = 17;

/// The four meaningful fields of one export record.
///
/// An export row carries many more columns; only these four are read, by
/// fixed offset. Rows too short for any of them are rejected at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueRow {
    pub id: String,
    pub assignee: String,
    pub priority: String,
    pub summary: String,
}

impl IssueRow {
    /// Extract the four meaningful fields from a raw CSV record.
    ///
    /// Fails with a descriptive error naming the first missing offset when
    /// the record is too short.
    pub fn from_record(record: &StringRecord) -> Result<Self> {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let field = |offset: usize| -> Result<String> {
            record
                .get(offset)
                .map(str::to_string)
                .ok_or_else(|| TallyError::MalformedRecord {
                    line,
                    offset,
                    len: record.len(),
                })
        };

        Ok(Self {
            id: field(COLUMN_ID)?,
            assignee: field(COLUMN_ASSIGNEE)?,
            priority: field(COLUMN_PRIORITY)?,
            summary: field(COLUMN_SUMMARY)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_from_record_full_row() {
        let mut fields = vec!["42", "x", "x", "alice", "high"];
        fields.extend(std::iter::repeat_n("x", 12));
        fields.push("fix the thing (3 h)");
        assert_eq!(fields.len(), 18);

        let row = IssueRow::from_record(&record(&fields)).unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.assignee, "alice");
        assert_eq!(row.priority, "high");
        assert_eq!(row.summary, "fix the thing (3 h)");
    }

    #[test]
    fn test_from_record_short_row_names_offset() {
        let err = IssueRow::from_record(&record(&["42", "x", "x", "alice", "high"]))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("offset 17"), "unexpected error: {msg}");
        assert!(msg.contains("5 fields"), "unexpected error: {msg}");
    }

    #[test]
    fn test_from_record_empty_row_names_first_offset() {
        let err = IssueRow::from_record(&StringRecord::new()).unwrap_err();
        assert!(err.to_string().contains("offset 0"));
    }
}
