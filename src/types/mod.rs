use std::sync::Arc;
use std::time::SystemTime;

use serde::Deserialize;

use crate::services::EntryStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
}

/// A single wiki entry as returned by the store
#[derive(Debug, Clone)]
pub struct Entry {
    /// Canonical title, with the casing it was stored under
    pub title: String,
    pub content: String,
    pub modified: Option<SystemTime>,
}

/// Severity of a user-facing notice banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient per-request feedback rendered on the next page
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Search bar submission
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub title: String,
}

/// New page submission
#[derive(Debug, Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

/// Edit page submission
#[derive(Debug, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub text: String,
}

/// Optional query parameters recognized by the entry view
#[derive(Debug, Deserialize, Default)]
pub struct ViewQuery {
    pub notice: Option<String>,
}
