//! Listing pages and their copy buttons

use crate::content;
use crate::models::{
    EmailTemplate, FeaturedTemplate, Language, PhoneScript, SecurityScript, TicketResponse,
};
use crate::views::ViewState;

/// Items listed on a page with a title/category filter box
pub trait PageItem {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn category(&self) -> &str;

    /// Case-insensitive containment of the raw filter in title or category
    fn matches_filter(&self, filter_lower: &str) -> bool {
        self.title().to_lowercase().contains(filter_lower)
            || self.category().to_lowercase().contains(filter_lower)
    }
}

macro_rules! impl_page_item {
    ($($ty:ty),*) => {
        $(
            impl PageItem for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn title(&self) -> &str {
                    &self.title
                }

                fn category(&self) -> &str {
                    &self.category
                }
            }
        )*
    };
}

impl_page_item!(PhoneScript, EmailTemplate, TicketResponse, SecurityScript);

fn filter_items<'a, T: PageItem>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    let filter_lower = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .collect()
}

pub fn filter_phone_scripts(state: &ViewState) -> Vec<&'static PhoneScript> {
    filter_items(content::phone_scripts(), &state.filter)
}

pub fn filter_email_templates(state: &ViewState) -> Vec<&'static EmailTemplate> {
    filter_items(content::email_templates(), &state.filter)
}

pub fn filter_ticket_responses(state: &ViewState) -> Vec<&'static TicketResponse> {
    filter_items(content::ticket_responses(), &state.filter)
}

pub fn filter_security_scripts(state: &ViewState) -> Vec<&'static SecurityScript> {
    filter_items(content::security_scripts(), &state.filter)
}

/// Anything with a copy button
#[derive(Debug, Clone, Copy)]
pub enum CopyTarget {
    Phone(&'static PhoneScript),
    Email(&'static EmailTemplate),
    Ticket(&'static TicketResponse),
    Security(&'static SecurityScript),
    /// Featured template for one language; the length comes from the view state
    Featured(&'static FeaturedTemplate, Language),
}

/// Id accepted by [`CopyTarget::resolve`] for the featured template
pub const FEATURED_ID: &str = "featured";

impl CopyTarget {
    /// Find the copyable item with the given id.
    ///
    /// The featured template is addressed as `featured`, copied in `language`.
    pub fn resolve(id: &str, language: Language) -> Option<Self> {
        if id == FEATURED_ID {
            return Some(CopyTarget::Featured(content::featured_template(), language));
        }
        content::phone_script(id)
            .map(CopyTarget::Phone)
            .or_else(|| content::email_template(id).map(CopyTarget::Email))
            .or_else(|| content::ticket_response(id).map(CopyTarget::Ticket))
            .or_else(|| content::security_script(id).map(CopyTarget::Security))
    }

    /// Key of the "copied" indicator for this button
    pub fn feedback_key(&self) -> String {
        match self {
            CopyTarget::Phone(s) => s.id.clone(),
            CopyTarget::Email(t) => t.id.clone(),
            CopyTarget::Ticket(r) => r.id.clone(),
            CopyTarget::Security(s) => s.id.clone(),
            CopyTarget::Featured(_, language) => format!("{FEATURED_ID}:{}", language.code()),
        }
    }

    /// Toast text shown after a successful copy
    pub fn copied_description(&self) -> String {
        match self {
            CopyTarget::Phone(_) => "Script copied to clipboard".to_string(),
            CopyTarget::Email(_) => "Email template copied to clipboard".to_string(),
            CopyTarget::Ticket(_) => "Response copied to clipboard".to_string(),
            CopyTarget::Security(_) => "Security questions copied to clipboard".to_string(),
            CopyTarget::Featured(_, language) => {
                format!("{} version copied to clipboard", language.label())
            }
        }
    }
}

/// Text placed on the clipboard for `target` under the page's selections
pub fn copy_payload(target: &CopyTarget, state: &ViewState) -> String {
    match target {
        CopyTarget::Phone(script) => script.content.get(state.language).to_string(),
        CopyTarget::Email(template) => template.copy_text(state.language),
        CopyTarget::Ticket(response) => response.content.get(state.language).to_string(),
        CopyTarget::Security(script) => script.copy_text(state.language),
        CopyTarget::Featured(template, language) => {
            template.text(*language, state.length).to_string()
        }
    }
}
