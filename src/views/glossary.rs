//! A-Z glossary page

use crate::content;
use crate::models::GlossaryTerm;
use serde::Serialize;
use std::collections::BTreeMap;

pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Terms sharing an initial, sorted by term
#[derive(Debug, Clone, Serialize)]
pub struct LetterGroup<'a> {
    pub letter: char,
    pub terms: Vec<&'a GlossaryTerm>,
}

impl LetterGroup<'_> {
    /// "1 term" / "3 terms"
    pub fn count_label(&self) -> String {
        match self.terms.len() {
            1 => "1 term".to_string(),
            n => format!("{n} terms"),
        }
    }
}

/// Filtered and grouped glossary
#[derive(Debug, Clone, Serialize)]
pub struct GlossaryView<'a> {
    pub filter: String,
    pub terms: Vec<&'a GlossaryTerm>,
    #[serde(skip)]
    groups: BTreeMap<char, Vec<&'a GlossaryTerm>>,
}

impl GlossaryView<'static> {
    pub fn new(filter: &str) -> Self {
        Self::over(content::glossary_terms(), filter)
    }
}

impl<'a> GlossaryView<'a> {
    /// Filter `terms` on term, definition, category or any related term.
    /// A blank filter keeps every term.
    pub fn over(terms: &'a [GlossaryTerm], filter: &str) -> Self {
        let filtered: Vec<&GlossaryTerm> = if filter.trim().is_empty() {
            terms.iter().collect()
        } else {
            let needle = filter.to_lowercase();
            terms.iter().filter(|t| term_matches(t, &needle)).collect()
        };

        let mut groups: BTreeMap<char, Vec<&GlossaryTerm>> = BTreeMap::new();
        for term in &filtered {
            if let Some(letter) = term.initial() {
                groups.entry(letter).or_default().push(*term);
            }
        }
        for group in groups.values_mut() {
            group.sort_by(|a, b| a.term.to_lowercase().cmp(&b.term.to_lowercase()));
        }

        Self {
            filter: filter.to_string(),
            terms: filtered,
            groups,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Letters of the jump bar that have at least one term
    pub fn available_letters(&self) -> Vec<char> {
        ALPHABET
            .iter()
            .copied()
            .filter(|l| self.groups.contains_key(l))
            .collect()
    }

    /// Sections in A-Z order, empty letters skipped
    pub fn groups(&self) -> Vec<LetterGroup<'a>> {
        ALPHABET
            .iter()
            .filter_map(|letter| {
                self.groups.get(letter).map(|terms| LetterGroup {
                    letter: *letter,
                    terms: terms.clone(),
                })
            })
            .collect()
    }

    pub fn letter(&self, letter: char) -> Option<LetterGroup<'a>> {
        let letter = letter.to_ascii_uppercase();
        self.groups.get(&letter).map(|terms| LetterGroup {
            letter,
            terms: terms.clone(),
        })
    }
}

fn term_matches(term: &GlossaryTerm, needle: &str) -> bool {
    term.term.to_lowercase().contains(needle)
        || term.definition.to_lowercase().contains(needle)
        || term.category.to_lowercase().contains(needle)
        || term
            .related_terms
            .iter()
            .any(|r| r.to_lowercase().contains(needle))
}
