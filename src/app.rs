//! Bookshelf App
//!
//! Main application component: form on top, card grid below.

use leptos::prelude::*;
use bookshelf_core::{Config, Library};

use crate::components::{CardGrid, NewBookForm};
use crate::context::LibraryContext;
use crate::store::{store_card_count, Shelf};

#[component]
pub fn App(config: Config) -> impl IntoView {
    let library = Library::with_books(config.seed_books());
    log::info!("starting with {} books", library.len());

    let ctx = LibraryContext::new(library, Shelf::new());
    provide_context(ctx);
    ctx.render();

    view! {
        <main class="app-layout">
            <h1>{config.title}</h1>

            <NewBookForm />

            <CardGrid />

            <p class="book-count">{move || match store_card_count(&ctx.shelf.store) {
                1 => "1 book".to_string(),
                n => format!("{} books", n),
            }}</p>
        </main>
    }
}
