//! Conversion of catalog items into searchable records

use crate::models::{
    ContentType, EmailTemplate, GlossaryTerm, PhoneScript, SearchableRecord, TicketResponse,
};

/// Trait for catalog items that are exposed through the index
pub trait SearchDocument {
    /// Build the normalized record for this item
    fn to_record(&self) -> SearchableRecord;

    /// Get document ID
    fn document_id(&self) -> &str;
}

impl SearchDocument for PhoneScript {
    fn to_record(&self) -> SearchableRecord {
        SearchableRecord {
            id: self.id.clone(),
            content_type: ContentType::PhoneScript,
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            path: ContentType::PhoneScript.route().to_string(),
            content: Some(self.content.clone()),
        }
    }

    fn document_id(&self) -> &str {
        &self.id
    }
}

impl SearchDocument for EmailTemplate {
    fn to_record(&self) -> SearchableRecord {
        SearchableRecord {
            id: self.id.clone(),
            content_type: ContentType::EmailTemplate,
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            path: ContentType::EmailTemplate.route().to_string(),
            content: None,
        }
    }

    fn document_id(&self) -> &str {
        &self.id
    }
}

impl SearchDocument for TicketResponse {
    fn to_record(&self) -> SearchableRecord {
        SearchableRecord {
            id: self.id.clone(),
            content_type: ContentType::TicketResponse,
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            path: ContentType::TicketResponse.route().to_string(),
            content: None,
        }
    }

    fn document_id(&self) -> &str {
        &self.id
    }
}

impl SearchDocument for GlossaryTerm {
    /// The term itself always comes first in the keywords, so a term is
    /// findable by its own name.
    fn to_record(&self) -> SearchableRecord {
        let keywords = std::iter::once(&self.term)
            .chain(self.related_terms.iter())
            .map(|t| t.to_lowercase())
            .collect();

        SearchableRecord {
            id: self.id.clone(),
            content_type: ContentType::Glossary,
            title: self.term.clone(),
            category: self.category.clone(),
            description: self.definition.clone(),
            keywords,
            path: ContentType::Glossary.route().to_string(),
            content: None,
        }
    }

    fn document_id(&self) -> &str {
        &self.id
    }
}

impl From<&PhoneScript> for SearchableRecord {
    fn from(script: &PhoneScript) -> Self {
        script.to_record()
    }
}

impl From<&EmailTemplate> for SearchableRecord {
    fn from(template: &EmailTemplate) -> Self {
        template.to_record()
    }
}

impl From<&TicketResponse> for SearchableRecord {
    fn from(response: &TicketResponse) -> Self {
        response.to_record()
    }
}

impl From<&GlossaryTerm> for SearchableRecord {
    fn from(term: &GlossaryTerm) -> Self {
        term.to_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::models::Language;

    #[test]
    fn test_glossary_keywords_lead_with_term() {
        let term = GlossaryTerm {
            id: "g-x".to_string(),
            term: "PTO (Paid Time Off)".to_string(),
            definition: "Time away".to_string(),
            category: "Benefits".to_string(),
            related_terms: vec!["Vacation".to_string(), "Leave".to_string()],
        };
        let record = SearchableRecord::from(&term);
        assert_eq!(
            record.keywords,
            vec!["pto (paid time off)", "vacation", "leave"]
        );
        assert_eq!(record.description, "Time away");
        assert_eq!(record.path, "/glossary");
        assert!(record.content.is_none());
    }

    #[test]
    fn test_glossary_without_related_terms() {
        let term = GlossaryTerm {
            id: "g-y".to_string(),
            term: "Stipend".to_string(),
            definition: String::new(),
            category: "Compensation".to_string(),
            related_terms: vec![],
        };
        assert_eq!(term.to_record().keywords, vec!["stipend"]);
    }

    #[test]
    fn test_only_phone_scripts_carry_content() {
        let phone = SearchableRecord::from(&content::phone_scripts()[0]);
        let email = SearchableRecord::from(&content::email_templates()[0]);
        let ticket = SearchableRecord::from(&content::ticket_responses()[0]);

        let body = phone.content.as_ref().map(|c| c.get(Language::En).to_string());
        assert!(body.unwrap_or_default().starts_with("Good morning"));
        assert!(email.content.is_none());
        assert!(ticket.content.is_none());
        assert_eq!(ticket.path, "/ticket-responses");
    }

    #[test]
    fn test_document_id_matches_record_id() {
        let script = &content::phone_scripts()[1];
        assert_eq!(script.document_id(), script.to_record().id);
    }
}
