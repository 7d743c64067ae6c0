use thiserror::Error;

use crate::orbit::DomainError;

/// Failure to decode one TLE record. Local to that record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected at least 2 non-empty lines, got {0}")]
    TooFewLines(usize),
    #[error("expected at most 3 non-empty lines, got {0}")]
    TooManyLines(usize),
    #[error("last line of record does not start with \"2\"")]
    MissingLine2,
    #[error("line 1 of record does not start with \"1\"")]
    MissingLine1,
    #[error("invalid {field} field: {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("degenerate elements: {0}")]
    Domain(#[from] DomainError),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("TLE catalog not found: {0}")]
    NotFound(String),
    #[error("TLE file read error: {0}")]
    FileRead(#[from] std::io::Error),
}
