//! Error types for search operations

use crate::error::AppError;

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors raised while assembling a custom index.
///
/// Searching itself is total; only building an index from caller-supplied
/// records can be rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    /// Two records share an id
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    /// Record id is blank
    #[error("Record id must not be empty (title: {0})")]
    EmptyId(String),

    /// Keyword not stored in lowercase
    #[error("Keyword '{keyword}' of record {id} is not lowercase")]
    KeywordNotLowercase { id: String, keyword: String },
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_errors_become_validation_errors() {
        let err: AppError = SearchError::DuplicateId("ps-1".to_string()).into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("ps-1"));
    }
}
