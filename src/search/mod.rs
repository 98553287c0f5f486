//! Keyword search over the compiled-in content.
//!
//! The index is a flat list of [`SearchableRecord`]s in a fixed order
//! (phone scripts, email templates, ticket responses, glossary). Searching
//! is a stable filter by case-insensitive substring containment on the
//! title, description, category and keywords of each record. There is no
//! scoring: results keep index order, and callers truncate (quick results)
//! or group by type (results page) as they need.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ SearchService                            │
//! │  search()  quick_results()  respond()    │
//! └──────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │ ContentIndex (built once, read-only)     │
//! │  all()  get()  of_type()  stats()        │
//! └──────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │ content catalog (static data)            │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use people_services_wiki::search;
//!
//! let hits = search::search("greeting");
//! assert_eq!(hits[0].title, "Greeting - Standard Opening");
//!
//! let segments = search::highlight("Greeting - Standard Opening", "open");
//! assert!(segments.iter().any(|s| s.is_match));
//! ```

mod config;
mod document;
mod error;
mod highlight;
mod index;
mod query;
mod service;

pub use config::{SearchConfig, SearchConfigBuilder};
pub use document::SearchDocument;
pub use error::{SearchError, SearchResult};
pub use highlight::{highlight, render_marked, Segment};
pub use index::{ContentIndex, IndexStats, CONTENT_INDEX};
pub use query::{normalize_query, SearchQuery};
pub use service::{SearchGroups, SearchOutcome, SearchResponse, SearchService};

use crate::models::{ContentType, SearchableRecord};

/// Every record in the process-wide index, in index order
pub fn all() -> &'static [SearchableRecord] {
    CONTENT_INDEX.all()
}

/// Search the process-wide index
pub fn search(query: &str) -> Vec<&'static SearchableRecord> {
    CONTENT_INDEX.search(query)
}

/// First matches for the live suggestion list, using the default limit
pub fn quick_results(query: &str) -> Vec<&'static SearchableRecord> {
    SearchService::global(SearchConfig::default()).quick_results(query)
}

pub fn type_label(content_type: ContentType) -> &'static str {
    content_type.label()
}

pub fn type_color(content_type: ContentType) -> &'static str {
    content_type.color()
}
