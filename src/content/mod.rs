//! Compiled-in wiki content.
//!
//! Every script, template, response and glossary term lives here as static
//! data. Nothing is loaded at runtime and nothing is ever mutated; each list
//! is built on first access and kept for the life of the process.

mod email;
mod featured;
mod glossary;
mod phone;
mod security;
mod ticket;

use crate::models::{
    EmailTemplate, FeaturedTemplate, GlossaryTerm, PhoneScript, SecurityScript, TicketResponse,
};

pub(crate) fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

pub fn phone_scripts() -> &'static [PhoneScript] {
    &phone::PHONE_SCRIPTS
}

pub fn email_templates() -> &'static [EmailTemplate] {
    &email::EMAIL_TEMPLATES
}

pub fn ticket_responses() -> &'static [TicketResponse] {
    &ticket::TICKET_RESPONSES
}

pub fn glossary_terms() -> &'static [GlossaryTerm] {
    &glossary::GLOSSARY_TERMS
}

/// Verification scripts; shown on their own page and not part of search
pub fn security_scripts() -> &'static [SecurityScript] {
    &security::SECURITY_SCRIPTS
}

pub fn featured_template() -> &'static FeaturedTemplate {
    &featured::FEATURED_TEMPLATE
}

pub fn phone_script(id: &str) -> Option<&'static PhoneScript> {
    phone_scripts().iter().find(|s| s.id == id)
}

pub fn email_template(id: &str) -> Option<&'static EmailTemplate> {
    email_templates().iter().find(|t| t.id == id)
}

pub fn ticket_response(id: &str) -> Option<&'static TicketResponse> {
    ticket_responses().iter().find(|r| r.id == id)
}

pub fn glossary_term(id: &str) -> Option<&'static GlossaryTerm> {
    glossary_terms().iter().find(|t| t.id == id)
}

pub fn security_script(id: &str) -> Option<&'static SecurityScript> {
    security_scripts().iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, TemplateLength};
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(phone_scripts().len(), 4);
        assert_eq!(email_templates().len(), 3);
        assert_eq!(ticket_responses().len(), 3);
        assert_eq!(glossary_terms().len(), 15);
        assert_eq!(security_scripts().len(), 3);
    }

    #[test]
    fn test_ids_are_unique_across_catalog() {
        let mut seen = HashSet::new();
        let ids = phone_scripts()
            .iter()
            .map(|s| s.id.as_str())
            .chain(email_templates().iter().map(|t| t.id.as_str()))
            .chain(ticket_responses().iter().map(|r| r.id.as_str()))
            .chain(glossary_terms().iter().map(|t| t.id.as_str()))
            .chain(security_scripts().iter().map(|s| s.id.as_str()));
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for kw in phone_scripts()
            .iter()
            .flat_map(|s| s.keywords.iter())
            .chain(email_templates().iter().flat_map(|t| t.keywords.iter()))
            .chain(ticket_responses().iter().flat_map(|r| r.keywords.iter()))
        {
            assert_eq!(kw, &kw.to_lowercase());
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(
            phone_script("ps-2").map(|s| s.title.as_str()),
            Some("Hold Request")
        );
        assert_eq!(
            glossary_term("g-15").map(|t| t.term.as_str()),
            Some("Ticket")
        );
        assert!(email_template("ps-1").is_none());
        assert!(security_script("sec-9").is_none());
    }

    #[test]
    fn test_every_body_is_translated() {
        for script in phone_scripts() {
            for (_, text) in script.content.iter() {
                assert!(!text.is_empty());
            }
        }
        let featured = featured_template();
        for lang in Language::ALL {
            assert!(!featured.text(lang, TemplateLength::Short).is_empty());
            assert!(
                featured.text(lang, TemplateLength::Long).len()
                    > featured.text(lang, TemplateLength::Short).len()
            );
        }
    }
}
