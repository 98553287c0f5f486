//! Main search service implementation

use crate::models::{ContentType, SearchableRecord};
use crate::search::config::SearchConfig;
use crate::search::index::{ContentIndex, CONTENT_INDEX};
use crate::search::query::SearchQuery;
use serde::Serialize;
use std::collections::BTreeMap;

/// Results partitioned by content type.
///
/// All four types are always present (possibly empty) and iterate in index
/// order; within a group the index order is kept.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SearchGroups<'a> {
    groups: BTreeMap<ContentType, Vec<&'a SearchableRecord>>,
}

impl<'a> SearchGroups<'a> {
    pub fn from_results(results: &[&'a SearchableRecord]) -> Self {
        let mut groups: BTreeMap<ContentType, Vec<&'a SearchableRecord>> =
            ContentType::ALL.iter().map(|t| (*t, Vec::new())).collect();
        for record in results {
            groups.entry(record.content_type).or_default().push(*record);
        }
        Self { groups }
    }

    pub fn get(&self, content_type: ContentType) -> &[&'a SearchableRecord] {
        self.groups
            .get(&content_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Groups that have at least one result
    pub fn non_empty(&self) -> impl Iterator<Item = (ContentType, &[&'a SearchableRecord])> {
        self.groups
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(t, records)| (*t, records.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// What the results page should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Nothing typed yet
    NoQuery,
    /// A query was entered and nothing matched
    NoMatches,
    Matches(usize),
}

/// Full results page payload
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<'a> {
    /// Query as entered
    pub query: String,

    /// Query without surrounding whitespace
    pub trimmed: String,

    /// Every match, in index order
    pub results: Vec<&'a SearchableRecord>,

    /// The same matches split by type
    pub groups: SearchGroups<'a>,
}

impl<'a> SearchResponse<'a> {
    pub fn outcome(&self) -> SearchOutcome {
        if self.query.is_empty() {
            SearchOutcome::NoQuery
        } else if self.results.is_empty() {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Matches(self.results.len())
        }
    }

    /// Header line, e.g. `3 results for "jira"`
    pub fn summary(&self) -> String {
        match self.outcome() {
            SearchOutcome::NoQuery => "Enter a search term to find scripts".to_string(),
            SearchOutcome::NoMatches => {
                format!("We couldn't find anything matching \"{}\".", self.query)
            }
            SearchOutcome::Matches(1) => format!("1 result for \"{}\"", self.query),
            SearchOutcome::Matches(n) => format!("{} results for \"{}\"", n, self.query),
        }
    }
}

/// Search front door over a content index
#[derive(Debug, Clone)]
pub struct SearchService<'a> {
    index: &'a ContentIndex,
    config: SearchConfig,
}

impl SearchService<'static> {
    /// Service over the process-wide index
    pub fn global(config: SearchConfig) -> Self {
        Self::new(&CONTENT_INDEX, config)
    }
}

impl<'a> SearchService<'a> {
    pub fn new(index: &'a ContentIndex, config: SearchConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &'a ContentIndex {
        self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Every match in index order, truncated to the query limit if one is set
    pub fn search(&self, query: &SearchQuery) -> Vec<&'a SearchableRecord> {
        let mut results = self.index.search(&query.query);
        if let Some(limit) = query.limit {
            results.truncate(limit);
        }

        tracing::debug!(
            query = %query.query,
            limit = ?query.limit,
            matches = results.len(),
            "search executed"
        );
        results
    }

    /// Live suggestions: the first few matches, no ranking applied
    pub fn quick_results(&self, query: &str) -> Vec<&'a SearchableRecord> {
        self.search(&SearchQuery::new(query).with_limit(self.config.quick_results_limit))
    }

    /// Full results page: every match plus the per-type grouping
    pub fn respond(&self, query: &str) -> SearchResponse<'a> {
        let results = self.search(&SearchQuery::new(query));
        let groups = SearchGroups::from_results(&results);

        SearchResponse {
            query: query.to_string(),
            trimmed: query.trim().to_string(),
            results,
            groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::config::SearchConfigBuilder;

    fn service() -> SearchService<'static> {
        SearchService::global(SearchConfig::default())
    }

    #[test]
    fn test_quick_results_truncate_to_limit() {
        let all = service().search(&SearchQuery::new("e"));
        assert!(all.len() > 6);
        let quick = service().quick_results("e");
        assert_eq!(quick.len(), 6);
        assert_eq!(quick.as_slice(), &all[..6]);
    }

    #[test]
    fn test_quick_results_respect_config() {
        let config = SearchConfigBuilder::new().quick_results_limit(2).build();
        let svc = SearchService::global(config);
        assert_eq!(svc.quick_results("request").len(), 2);
    }

    #[test]
    fn test_groups_partition_results() {
        let response = service().respond("request");
        assert_eq!(response.groups.total(), response.results.len());
        for (content_type, records) in response.groups.non_empty() {
            assert!(records.iter().all(|r| r.content_type == content_type));
        }
        assert!(response.groups.get(ContentType::EmailTemplate).len() >= 2);
    }

    #[test]
    fn test_outcome_distinguishes_blank_from_no_match() {
        assert_eq!(service().respond("").outcome(), SearchOutcome::NoQuery);
        assert_eq!(service().respond("   ").outcome(), SearchOutcome::NoMatches);
        assert_eq!(
            service().respond("zzz-no-match").outcome(),
            SearchOutcome::NoMatches
        );
        assert!(matches!(
            service().respond("pto").outcome(),
            SearchOutcome::Matches(_)
        ));
    }

    #[test]
    fn test_summary_pluralization() {
        let response = service().respond("stipend");
        assert_eq!(response.summary(), "1 result for \"stipend\"");
        let response = service().respond("jira");
        assert_eq!(response.summary(), "4 results for \"jira\"");
    }

    #[test]
    fn test_response_serializes() {
        let value = serde_json::to_value(service().respond("hold")).unwrap();
        assert_eq!(value["query"], "hold");
        assert_eq!(value["trimmed"], "hold");
        assert!(value["groups"]["phone-script"].is_array());
    }
}
