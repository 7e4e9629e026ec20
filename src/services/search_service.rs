use std::sync::Arc;

use log::{debug, info};

use crate::errors::WikiError;
use crate::services::EntryStore;

/// Service for looking up entry titles related to a query
pub struct SearchService {
    store: Arc<dyn EntryStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// Titles containing `query` as a case-insensitive substring, sorted
    /// case-insensitively for stable display. An exact match of the query is
    /// included like any other substring hit. Exact-match lookup itself is the
    /// store's job.
    pub fn related_titles(&self, query: &str) -> Result<Vec<String>, WikiError> {
        let needle = query.to_lowercase();
        if needle.trim().is_empty() {
            debug!("Empty search query received");
            return Ok(Vec::new());
        }

        let mut matches: Vec<String> = self
            .store
            .list_entries()?
            .into_iter()
            .filter(|title| title.to_lowercase().contains(&needle))
            .collect();
        matches.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));

        info!("Search for '{}' found {} related titles", query, matches.len());
        Ok(matches)
    }
}
