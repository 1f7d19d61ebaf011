//! Card Store
//!
//! Rendered cards live in a Leptos reactive store. `StoreSurface` is the
//! reconciler's view of that store.
//!
//! Per-card read signals belong to a child of the app's owner, one child per
//! render pass, never to the owner of whatever event triggered the render.
//! The previous pass's owner is cleaned up once its cards are swapped out.

use leptos::prelude::*;
use reactive_stores::Store;

use bookshelf_core::{Card, Surface};

/// One rendered card plus its own read signal for point updates
#[derive(Clone, Debug)]
pub struct CardState {
    pub card: Card,
    pub read: RwSignal<bool>,
    /// Render pass this card belongs to; part of the view key
    pub generation: u32,
}

/// Everything currently drawn on the shelf
#[derive(Clone, Debug, Default, Store)]
pub struct ShelfState {
    pub cards: Vec<CardState>,
    pub generation: u32,
}

/// Type alias for the store
pub type ShelfStore = Store<ShelfState>;

struct CardOwners {
    /// Long-lived owner the shelf was created under
    root: Owner,
    /// Owner of the cards currently in the store
    current: Option<Owner>,
}

/// The card store plus the owners its card signals live under
#[derive(Clone, Copy)]
pub struct Shelf {
    pub store: ShelfStore,
    owners: StoredValue<CardOwners>,
}

impl Shelf {
    /// Create under the app's root owner; card signals outlive event handlers.
    pub fn new() -> Self {
        let root = Owner::current().unwrap_or_else(Owner::new);
        Self {
            store: Store::new(ShelfState::default()),
            owners: StoredValue::new(CardOwners { root, current: None }),
        }
    }
}

/// Cards in display order (tracked)
pub fn store_cards(store: &ShelfStore) -> Vec<CardState> {
    store.cards().get()
}

/// Number of cards drawn (tracked)
pub fn store_card_count(store: &ShelfStore) -> usize {
    store.cards().read().len()
}

/// Writes reconciler output into a [`Shelf`].
///
/// A full render buffers cards and swaps them in on `commit`, bumping the
/// generation so every card view is rebuilt.
pub struct StoreSurface {
    shelf: Shelf,
    pending: Vec<Card>,
}

impl StoreSurface {
    pub fn new(shelf: Shelf) -> Self {
        Self {
            shelf,
            pending: Vec::new(),
        }
    }
}

impl Surface for StoreSurface {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn append_card(&mut self, card: Card) {
        self.pending.push(card);
    }

    fn update_read(&mut self, index: usize, read: bool) {
        self.shelf.store.cards().with_untracked(|cards| {
            if let Some(state) = cards.get(index) {
                state.read.set(read);
            }
        });
    }

    fn commit(&mut self) {
        let generation = self.shelf.store.generation().get_untracked().wrapping_add(1);
        let pending = std::mem::take(&mut self.pending);

        let swapped = self.shelf.owners.try_update_value(|owners| {
            let cards_owner = owners.root.child();
            let cards: Vec<CardState> = cards_owner.with(|| {
                pending
                    .into_iter()
                    .map(|card| CardState {
                        read: RwSignal::new(card.read),
                        card,
                        generation,
                    })
                    .collect()
            });
            (cards, owners.current.replace(cards_owner))
        });
        let Some((cards, previous)) = swapped else {
            log::warn!("shelf disposed; render dropped");
            return;
        };

        *self.shelf.store.generation().write() = generation;
        *self.shelf.store.cards().write() = cards;
        if let Some(previous) = previous {
            previous.cleanup();
        }
    }
}
