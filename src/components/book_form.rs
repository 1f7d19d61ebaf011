//! New Book Form Component
//!
//! Collapsible form for adding a book. Cleared and closed after a successful
//! submit; on a validation error the entered values stay put.

use leptos::prelude::*;

use bookshelf_core::BookForm;

use crate::context::use_library;

#[component]
pub fn NewBookForm() -> impl IntoView {
    let ctx = use_library();

    let (open, set_open) = signal(false);
    let (title, set_title) = signal(String::new());
    let (author, set_author) = signal(String::new());
    let (pages, set_pages) = signal(String::new());
    let (read, set_read) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let clear_form = move || {
        set_title.set(String::new());
        set_author.set(String::new());
        set_pages.set(String::new());
        set_read.set(false);
        set_error.set(None);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = BookForm {
            title: title.get_untracked(),
            author: author.get_untracked(),
            pages: pages.get_untracked(),
            read: read.get_untracked(),
        };
        match ctx.add_book(form) {
            Ok(_) => {
                clear_form();
                set_open.set(false);
            }
            Err(e) => {
                log::debug!("form rejected: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <button class="open-button" on:click=move |_| set_open.update(|o| *o = !*o)>
            {move || if open.get() { "Close" } else { "New Book" }}
        </button>

        <Show when=move || open.get()>
            <form class="book-form" on:submit=submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Author"
                    <input
                        type="text"
                        prop:value=move || author.get()
                        on:input=move |ev| set_author.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Pages"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || pages.get()
                        on:input=move |ev| set_pages.set(event_target_value(&ev))
                    />
                </label>
                <label class="read-check">
                    <input
                        type="checkbox"
                        prop:checked=move || read.get()
                        on:change=move |ev| set_read.set(event_target_checked(&ev))
                    />
                    "Read"
                </label>

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button type="submit">"Add Book"</button>
            </form>
        </Show>
    }
}
