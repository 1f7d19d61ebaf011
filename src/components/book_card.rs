//! Book Card Component
//!
//! One book on the shelf with read toggle and delete controls.

use leptos::prelude::*;

use bookshelf_core::{read_label, CardAction};

use crate::context::use_library;
use crate::store::CardState;

/// A single card; both controls act on the index it was rendered at
#[component]
pub fn BookCard(state: CardState) -> impl IntoView {
    let ctx = use_library();

    let index = state.card.index;
    let read = state.read;

    view! {
        <div class="card" data-index=index.to_string() data-id=state.card.book_id.to_string()>
            <span class="title">{state.card.title}</span>
            <span class="author">{state.card.byline}</span>
            <span class="pages">{state.card.pages}</span>

            // Point update: only this card's read signal changes
            <button
                class=move || if read.get() { "card-read-btn read" } else { "card-read-btn" }
                on:click=move |_| {
                    ctx.dispatch(CardAction::ToggleRead(index));
                }
            >
                {move || read_label(read.get())}
            </button>

            // Full rebuild of the grid
            <button class="card-remove-btn" on:click=move |_| {
                ctx.dispatch(CardAction::Remove(index));
            }>"Delete"</button>
        </div>
    }
}
