//! Page logic without rendering.
//!
//! Each page owns a [`ViewState`] and passes it to the pure functions here.
//! Nothing in this module holds state between calls.

pub mod glossary;
pub mod pages;
pub mod state;

pub use glossary::{GlossaryView, LetterGroup, ALPHABET};
pub use pages::{
    copy_payload, filter_email_templates, filter_phone_scripts, filter_security_scripts,
    filter_ticket_responses, CopyTarget, PageItem,
};
pub use state::ViewState;
