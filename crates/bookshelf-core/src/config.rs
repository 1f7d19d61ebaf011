//! App Configuration
//!
//! Loaded from JSON; every field falls back to its default when absent.

use log::LevelFilter;
use serde::Deserialize;

use crate::book::Book;
use crate::entity::{DomainError, DomainResult};
use crate::form::BookForm;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heading shown above the card grid
    pub title: String,
    /// One of off/error/warn/info/debug/trace
    pub log_level: String,
    /// Books present at startup, in display order
    pub seed_books: Vec<BookForm>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "My Library".to_string(),
            log_level: "info".to_string(),
            seed_books: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidInput(format!("config: {}", e)))
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or(LevelFilter::Info)
    }

    /// Seed books that pass form validation; invalid entries are skipped
    pub fn seed_books(&self) -> Vec<Book> {
        self.seed_books
            .iter()
            .filter_map(|form| match form.clone().submit() {
                Ok(book) => Some(book),
                Err(e) => {
                    log::warn!("skipping seed book {:?}: {}", form.title, e);
                    None
                }
            })
            .collect()
    }
}
