//! Query normalization

use serde::{Deserialize, Serialize};

/// Trim and lowercase a query; `None` when nothing is left.
///
/// Lowercasing is plain Unicode case mapping. No locale rules apply since
/// matching is substring containment only.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// A query as typed, with an optional cap on the number of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The text exactly as the user entered it
    pub query: String,

    /// Maximum number of results; `None` returns every match
    pub limit: Option<usize>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Normalized form used for matching
    pub fn normalized(&self) -> Option<String> {
        normalize_query(&self.query)
    }

    /// True when the user has not typed anything yet (raw text is empty)
    pub fn is_blank(&self) -> bool {
        self.query.is_empty()
    }
}
