use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("malformed record on line {line}: {len} fields, no field at offset {offset}")]
    MalformedRecord { line: u64, offset: usize, len: usize },

    #[error("invalid hours value '{capture}': {reason}")]
    InvalidHours { capture: String, reason: String },

    #[error("identifier '{name}' contains untypeable character '{ch}'")]
    UntypeableCharacter { name: String, ch: char },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TallyError>;
