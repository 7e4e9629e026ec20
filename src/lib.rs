//! Folio - a small flat-file Markdown wiki
//!
//! Entries are individual Markdown files in a single directory, keyed by
//! title with case-insensitive lookup, rendered to HTML for display.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod templates;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests;

use axum::{Router, routing::get};

// Re-export commonly used items
pub use config::Config;
pub use errors::WikiError;
pub use services::{EntryStore, FileStore, MarkdownService, MemoryStore, SearchService};
pub use types::{AppState, Entry, Notice, NoticeLevel};

/// Build the application router over the given state
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/wiki/:title", get(handlers::handle_entry))
        .route(
            "/search",
            get(handlers::handle_search_get).post(handlers::handle_search),
        )
        .route(
            "/create",
            get(handlers::handle_create_get).post(handlers::handle_create),
        )
        .route(
            "/edit/:title",
            get(handlers::handle_edit_get).post(handlers::handle_edit),
        )
        .route("/random", get(handlers::handle_random))
        .with_state(state)
}
