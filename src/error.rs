use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset '{path}' has no '{column}' column")]
    MissingColumn { column: String, path: String },

    #[error("Pattern Compile Error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Chart Rendering Error: {0}")]
    Chart(String),
}

pub type AuditResult<T> = Result<T, AuditError>;
