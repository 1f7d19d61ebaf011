//! New Book Form Input
//!
//! Raw values as read from the form fields, before they become a [`Book`].

use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::entity::{DomainError, DomainResult};

/// The four form fields. `Default` is the cleared form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub pages: String,
    pub read: bool,
}

impl BookForm {
    /// Reject blank title/author and a page count that is not a positive integer.
    ///
    /// An empty page count is accepted.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidInput("Title is required".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(DomainError::InvalidInput("Author is required".to_string()));
        }
        let pages = self.pages.trim();
        if !pages.is_empty() && !matches!(pages.parse::<u32>(), Ok(n) if n > 0) {
            return Err(DomainError::InvalidInput(format!(
                "Pages must be a positive whole number, got {:?}",
                self.pages
            )));
        }
        Ok(())
    }

    /// Build the book without validating; text fields are trimmed
    pub fn into_book(self) -> Book {
        Book::new(
            self.title.trim(),
            self.author.trim(),
            self.pages.trim(),
            self.read,
        )
    }

    /// Validate, then build the book
    pub fn submit(self) -> DomainResult<Book> {
        self.validate()?;
        Ok(self.into_book())
    }
}
