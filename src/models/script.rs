//! Per-type bodies shown on the content pages.
//!
//! These carry the full localized texts. Search never reads them; the index
//! holds a [`SearchableRecord`](crate::models::SearchableRecord) per item and
//! the pages look the body up by id.

use crate::models::{Language, LocalizedText};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneScript {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub content: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub subject: LocalizedText,
    pub body: LocalizedText,
}

impl EmailTemplate {
    /// Clipboard payload: subject line, blank line, body
    pub fn copy_text(&self, language: Language) -> String {
        format!(
            "Subject: {}\n\n{}",
            self.subject.get(language),
            self.body.get(language)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketResponse {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub content: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub id: String,
    pub term: String,
    pub definition: String,
    pub category: String,
    #[serde(default)]
    pub related_terms: Vec<String>,
}

impl GlossaryTerm {
    /// Uppercase initial used for the A-Z sections
    pub fn initial(&self) -> Option<char> {
        self.term
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
    }
}

/// Identity verification questions read to a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityScript {
    pub id: String,
    pub title: String,
    pub category: String,
    pub questions: Vec<LocalizedText>,
}

impl SecurityScript {
    /// Clipboard payload: one numbered question per line
    pub fn copy_text(&self, language: Language) -> String {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{}. {}", i + 1, q.get(language)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Short or long rendition of the featured template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateLength {
    #[default]
    Short,
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariants {
    pub short: String,
    pub long: String,
}

impl TemplateVariants {
    pub fn get(&self, length: TemplateLength) -> &str {
        match length {
            TemplateLength::Short => &self.short,
            TemplateLength::Long => &self.long,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagVariant {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTag {
    pub label: String,
    pub variant: TagVariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    pub label: String,
    pub path: String,
}

/// The template highlighted on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedTemplate {
    pub title: String,
    pub tags: Vec<TemplateTag>,
    pub es: TemplateVariants,
    pub en: TemplateVariants,
    pub pt: TemplateVariants,
    pub when_to_use: Vec<String>,
    pub related: Vec<RelatedLink>,
}

impl FeaturedTemplate {
    pub fn variants(&self, language: Language) -> &TemplateVariants {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
            Language::Pt => &self.pt,
        }
    }

    pub fn text(&self, language: Language, length: TemplateLength) -> &str {
        self.variants(language).get(length)
    }

    /// Heading, e.g. "Standard Answer - Spanish"
    pub fn heading(&self, language: Language) -> String {
        format!("{} - {}", self.title, language.label())
    }
}
