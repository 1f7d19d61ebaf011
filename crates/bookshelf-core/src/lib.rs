//! Bookshelf Core
//!
//! Layered like the rest of the app:
//! - entity, book: the record and its errors
//! - library: the ordered collection
//! - reconciler: keeps rendered cards in step with the library
//! - form, config: input coming from outside
//!
//! No browser dependencies live here.

mod entity;
mod book;
mod library;
mod form;
mod config;
pub mod reconciler;

#[cfg(test)]
mod tests;

pub use entity::{Entity, DomainError, DomainResult};
pub use book::{read_label, Book};
pub use library::Library;
pub use form::BookForm;
pub use config::Config;
pub use reconciler::{Card, CardAction, MemorySurface, Reconciled, Surface};
