//! Library Context
//!
//! The one library instance for the session, provided via Leptos Context API.

use leptos::prelude::*;

use bookshelf_core::reconciler::{self, CardAction, Reconciled};
use bookshelf_core::{BookForm, DomainError, DomainResult, Library};

use crate::store::{Shelf, StoreSurface};

/// Owns the library and the shelf its cards are drawn onto
#[derive(Clone, Copy)]
pub struct LibraryContext {
    library: StoredValue<Library>,
    /// Rendered cards - read via store helpers
    pub shelf: Shelf,
}

impl LibraryContext {
    pub fn new(library: Library, shelf: Shelf) -> Self {
        Self {
            library: StoredValue::new(library),
            shelf,
        }
    }

    /// Redraw every card from the library
    pub fn render(&self) {
        let mut surface = StoreSurface::new(self.shelf);
        if self
            .library
            .try_with_value(|library| reconciler::render(library, &mut surface))
            .is_none()
        {
            log::warn!("library disposed; render skipped");
        }
    }

    /// Validate the form, add the book and redraw
    pub fn add_book(&self, form: BookForm) -> DomainResult<u32> {
        let book = form.submit()?;
        let id = self
            .library
            .try_update_value(|library| library.add(book))
            .ok_or_else(|| DomainError::Internal("library is no longer available".to_string()))?;
        log::info!("added book {}", id);
        self.render();
        Ok(id)
    }

    /// Route a card control into the library
    pub fn dispatch(&self, action: CardAction) -> Reconciled {
        let mut surface = StoreSurface::new(self.shelf);
        let result = self
            .library
            .try_update_value(|library| reconciler::dispatch(library, &mut surface, action))
            .unwrap_or(Reconciled::Ignored);
        match &result {
            Reconciled::Toggled { index, read } => log::info!("card {} read={}", index, read),
            Reconciled::Removed(book) => log::info!("removed book {} ({:?})", book.id, book.title),
            Reconciled::Ignored => log::warn!("{:?} ignored", action),
        }
        result
    }
}

/// Get the library context
pub fn use_library() -> LibraryContext {
    expect_context::<LibraryContext>()
}
