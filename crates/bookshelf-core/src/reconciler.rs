//! Card Reconciler
//!
//! Turns the library into one card per book on a [`Surface`] and routes card
//! actions back into the library.
//!
//! Removal always rebuilds every card, so each card's bound index is re-read
//! from the current order. Toggling only touches the one card.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::book::{read_label, Book};
use crate::library::Library;

/// Presentation of one book, bound to its position at render time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Position in the library when this card was rendered
    pub index: usize,
    pub book_id: u32,
    pub title: String,
    /// "By {author}"
    pub byline: String,
    /// "Pages: {pages}"
    pub pages: String,
    pub read: bool,
}

impl Card {
    fn from_book(index: usize, book: &Book) -> Self {
        Self {
            index,
            book_id: book.id,
            title: book.title.clone(),
            byline: format!("By {}", book.author),
            pages: format!("Pages: {}", book.pages),
            read: book.read,
        }
    }

    pub fn read_label(&self) -> &'static str {
        read_label(self.read)
    }
}

/// A control on a rendered card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    ToggleRead(usize),
    Remove(usize),
}

/// What a dispatched action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    /// Point update: the card at `index` now shows `read`
    Toggled { index: usize, read: bool },
    /// Full rebuild after removing the book
    Removed(Book),
    /// Index was out of range; nothing changed
    Ignored,
}

/// Where cards are drawn
pub trait Surface {
    /// Drop every card currently shown
    fn clear(&mut self);

    /// Append a card after the ones already shown
    fn append_card(&mut self, card: Card);

    /// Update the read state of the card at `index` in place
    fn update_read(&mut self, index: usize, read: bool);

    /// Called once a full render has appended every card
    fn commit(&mut self) {}
}

/// Clear the surface and draw one card per book, in library order
pub fn render<S: Surface + ?Sized>(library: &Library, surface: &mut S) {
    surface.clear();
    for (index, book) in library.all().iter().enumerate() {
        surface.append_card(Card::from_book(index, book));
    }
    surface.commit();
    debug!("rendered {} cards", library.len());
}

/// Apply a card action to the library and bring the surface up to date
pub fn dispatch<S: Surface + ?Sized>(
    library: &mut Library,
    surface: &mut S,
    action: CardAction,
) -> Reconciled {
    match action {
        CardAction::ToggleRead(index) => match library.toggle_read_at(index) {
            Some(read) => {
                surface.update_read(index, read);
                Reconciled::Toggled { index, read }
            }
            None => Reconciled::Ignored,
        },
        CardAction::Remove(index) => match library.remove_at(index) {
            Some(book) => {
                render(library, surface);
                Reconciled::Removed(book)
            }
            None => Reconciled::Ignored,
        },
    }
}

/// In-memory surface that keeps the drawn cards
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    cards: Vec<Card>,
    /// Number of full renders committed
    pub renders: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Surface for MemorySurface {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    fn update_read(&mut self, index: usize, read: bool) {
        if let Some(card) = self.cards.get_mut(index) {
            card.read = read;
        }
    }

    fn commit(&mut self) {
        self.renders += 1;
    }
}
