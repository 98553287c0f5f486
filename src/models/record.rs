use crate::models::LocalizedText;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Content categories held by the index.
///
/// The variant order is the index order: phone scripts first, glossary last.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ContentType {
    PhoneScript,
    EmailTemplate,
    TicketResponse,
    Glossary,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::PhoneScript,
        ContentType::EmailTemplate,
        ContentType::TicketResponse,
        ContentType::Glossary,
    ];

    /// Badge label shown next to a result
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::PhoneScript => "Phone Script",
            ContentType::EmailTemplate => "Email Template",
            ContentType::TicketResponse => "Ticket Response",
            ContentType::Glossary => "Glossary",
        }
    }

    /// Group heading on the full results page
    pub fn plural_label(&self) -> &'static str {
        match self {
            ContentType::PhoneScript => "Phone Scripts",
            ContentType::EmailTemplate => "Email Templates",
            ContentType::TicketResponse => "Ticket Responses",
            ContentType::Glossary => "Glossary Terms",
        }
    }

    /// Presentation style token for the badge
    pub fn color(&self) -> &'static str {
        match self {
            ContentType::PhoneScript => "bg-info text-primary-foreground",
            ContentType::EmailTemplate => "bg-success text-primary-foreground",
            ContentType::TicketResponse => "bg-warning text-foreground",
            ContentType::Glossary => "bg-primary text-primary-foreground",
        }
    }

    /// Route of the page listing every item of this type
    pub fn route(&self) -> &'static str {
        match self {
            ContentType::PhoneScript => "/phone-scripts",
            ContentType::EmailTemplate => "/email-templates",
            ContentType::TicketResponse => "/ticket-responses",
            ContentType::Glossary => "/glossary",
        }
    }
}

/// Normalized search metadata for one script, template, response or term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableRecord {
    /// Unique across the whole index
    pub id: String,

    #[serde(rename = "type")]
    pub content_type: ContentType,

    pub title: String,

    pub category: String,

    pub description: String,

    /// Lowercase match terms, never displayed
    pub keywords: Vec<String>,

    /// Navigation target the record resolves to
    pub path: String,

    /// Localized body, only carried by phone scripts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<LocalizedText>,
}

impl SearchableRecord {
    /// Check a record against an already normalized (trimmed, lowercased) query.
    ///
    /// Keywords are lowercased when the record is built, so they are tested
    /// for containment directly.
    pub fn matches(&self, normalized_query: &str) -> bool {
        self.title.to_lowercase().contains(normalized_query)
            || self.description.to_lowercase().contains(normalized_query)
            || self.category.to_lowercase().contains(normalized_query)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.contains(normalized_query))
    }

    pub fn label(&self) -> &'static str {
        self.content_type.label()
    }

    pub fn color(&self) -> &'static str {
        self.content_type.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record() -> SearchableRecord {
        SearchableRecord {
            id: "ps-1".to_string(),
            content_type: ContentType::PhoneScript,
            title: "Greeting - Standard Opening".to_string(),
            category: "General".to_string(),
            description: "Standard greeting for incoming calls".to_string(),
            keywords: vec!["greeting".to_string(), "hello".to_string()],
            path: "/phone-scripts".to_string(),
            content: None,
        }
    }

    #[test]
    fn test_content_type_wire_codes() {
        assert_eq!(ContentType::TicketResponse.to_string(), "ticket-response");
        assert_eq!(
            ContentType::from_str("email-template").unwrap(),
            ContentType::EmailTemplate
        );
        let json = serde_json::to_string(&ContentType::PhoneScript).unwrap();
        assert_eq!(json, "\"phone-script\"");
    }

    #[test]
    fn test_all_is_index_order() {
        use strum::IntoEnumIterator;
        let declared: Vec<_> = ContentType::iter().collect();
        assert_eq!(declared, ContentType::ALL.to_vec());
        assert!(declared.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lookup_tables_are_distinct() {
        let labels: std::collections::HashSet<_> =
            ContentType::ALL.iter().map(|t| t.label()).collect();
        let colors: std::collections::HashSet<_> =
            ContentType::ALL.iter().map(|t| t.color()).collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(colors.len(), 4);
        assert_eq!(ContentType::Glossary.plural_label(), "Glossary Terms");
        assert_eq!(ContentType::PhoneScript.plural_label(), "Phone Scripts");
    }

    #[test]
    fn test_matches_each_field() {
        let r = record();
        assert!(r.matches("opening"));
        assert!(r.matches("incoming"));
        assert!(r.matches("general"));
        assert!(r.matches("hell"));
        assert!(!r.matches("farewell"));
    }

    #[test]
    fn test_matches_expects_normalized_query() {
        // Callers lowercase first; uppercase input never equals lowered fields
        assert!(!record().matches("GREETING"));
    }

    #[test]
    fn test_record_serializes_type_field() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["type"], "phone-script");
        assert!(value.get("content").is_none());
    }
}
