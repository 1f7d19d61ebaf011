//! UI Components
//!
//! Leptos components for the form and the card grid.

mod book_card;
mod book_form;
mod card_grid;

pub use book_card::BookCard;
pub use book_form::NewBookForm;
pub use card_grid::CardGrid;
