//! Card Grid Component

use leptos::prelude::*;

use crate::components::BookCard;
use crate::context::use_library;
use crate::store::store_cards;

/// Grid of every card currently in the shelf store
#[component]
pub fn CardGrid() -> impl IntoView {
    let ctx = use_library();

    view! {
        <div class="card-container">
            <For
                each=move || store_cards(&ctx.shelf.store)
                // A new generation re-keys every card, forcing a rebuild
                key=|state| (state.generation, state.card.index)
                children=move |state| view! { <BookCard state=state /> }
            />
        </div>
    }
}
