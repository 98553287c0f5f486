use crate::models::{Language, TemplateLength};
use serde::{Deserialize, Serialize};

/// Transient selections of one page.
///
/// Owned by the caller and never shared between pages; dropping it resets
/// the page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub language: Language,
    pub filter: String,
    pub length: TemplateLength,
}

impl ViewState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_length(mut self, length: TemplateLength) -> Self {
        self.length = length;
        self
    }

    pub fn select_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn toggle_length(&mut self) {
        self.length = match self.length {
            TemplateLength::Short => TemplateLength::Long,
            TemplateLength::Long => TemplateLength::Short,
        };
    }
}
