//! Book Entity
//!
//! One tracked book: title, author, page count and read flag.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A single book entry
///
/// The page count is kept as entered; nothing downstream does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable identifier, stamped by the library on add (0 = not yet added)
    pub id: u32,
    pub title: String,
    pub author: String,
    /// Page count as entered
    pub pages: String,
    /// Read status
    pub read: bool,
}

impl Book {
    /// Create a book that has not been added to a library yet
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            author: author.into(),
            pages: pages.into(),
            read,
        }
    }

    /// Flip the read flag in place
    pub fn toggle_read(&mut self) {
        self.read = !self.read;
    }

    /// Label shown on the card's read toggle
    pub fn read_label(&self) -> &'static str {
        read_label(self.read)
    }
}

/// Label for a read toggle in the given state
pub fn read_label(read: bool) -> &'static str {
    if read { "Read" } else { "Not Read" }
}

impl Entity for Book {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
