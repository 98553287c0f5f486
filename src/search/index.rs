//! The immutable content index

use crate::content;
use crate::models::{ContentType, SearchableRecord};
use crate::search::document::SearchDocument;
use crate::search::error::{SearchError, SearchResult};
use crate::search::query::normalize_query;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Index statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Total number of records in the index
    pub total_documents: usize,

    /// Record count per content type, in index order
    pub by_type: BTreeMap<ContentType, usize>,
}

/// Flat, ordered and read-only collection of every searchable record
#[derive(Debug, Clone)]
pub struct ContentIndex {
    records: Vec<SearchableRecord>,
}

/// The process-wide index, built on first use from the compiled-in catalog
pub static CONTENT_INDEX: Lazy<ContentIndex> = Lazy::new(ContentIndex::build_default);

impl ContentIndex {
    /// Build the index from the catalog in the fixed order
    /// phone scripts, email templates, ticket responses, glossary.
    pub fn build_default() -> Self {
        let records: Vec<SearchableRecord> = content::phone_scripts()
            .iter()
            .map(SearchDocument::to_record)
            .chain(content::email_templates().iter().map(SearchDocument::to_record))
            .chain(content::ticket_responses().iter().map(SearchDocument::to_record))
            .chain(content::glossary_terms().iter().map(SearchDocument::to_record))
            .collect();

        tracing::debug!(records = records.len(), "content index built");
        Self { records }
    }

    /// Build an index over caller-supplied records, kept in the given order.
    ///
    /// Ids must be unique and non-empty, and keywords must already be
    /// lowercase.
    pub fn from_records(records: Vec<SearchableRecord>) -> SearchResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.trim().is_empty() {
                return Err(SearchError::EmptyId(record.title.clone()));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(SearchError::DuplicateId(record.id.clone()));
            }
            if let Some(keyword) = record.keywords.iter().find(|k| **k != k.to_lowercase()) {
                return Err(SearchError::KeywordNotLowercase {
                    id: record.id.clone(),
                    keyword: keyword.clone(),
                });
            }
        }

        Ok(Self { records })
    }

    /// Every record, in index order
    pub fn all(&self) -> &[SearchableRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SearchableRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records of one type, in index order
    pub fn of_type(&self, content_type: ContentType) -> impl Iterator<Item = &SearchableRecord> {
        self.records
            .iter()
            .filter(move |r| r.content_type == content_type)
    }

    /// Stable filter of the index by case-insensitive substring containment.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&SearchableRecord> {
        match normalize_query(query) {
            Some(normalized) => self
                .records
                .iter()
                .filter(|r| r.matches(&normalized))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn stats(&self) -> IndexStats {
        let mut by_type: BTreeMap<ContentType, usize> =
            ContentType::ALL.iter().map(|t| (*t, 0)).collect();
        for record in &self.records {
            *by_type.entry(record.content_type).or_default() += 1;
        }

        IndexStats {
            total_documents: self.records.len(),
            by_type,
        }
    }
}

impl Default for ContentIndex {
    fn default() -> Self {
        Self::build_default()
    }
}
