//! People Services wiki.
//!
//! A read-only catalog of multilingual HR scripts (phone scripts, email
//! templates, ticket responses, security verification questions and an A-Z
//! glossary) with keyword search, match highlighting and copy-to-clipboard
//! helpers.

pub mod clipboard;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod search;
pub mod telemetry;
pub mod views;

pub use config::Config;
pub use error::{AppError, Result};
