//! Library Collection
//!
//! Ordered, index-addressed list of books. Insertion order is display order.
//! Indices are positional: a removal shifts every later book down by one, so
//! an index is only meaningful against the state it was read from.

use log::{debug, warn};

use crate::book::Book;
use crate::entity::Entity;

#[derive(Debug, Clone)]
pub struct Library {
    books: Vec<Book>,
    next_id: u32,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a library from an initial list of books, in order
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut library = Self::new();
        for book in books {
            library.add(book);
        }
        library
    }

    /// Append a book and return the id stamped on it
    pub fn add(&mut self, mut book: Book) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        book.id = id;
        debug!("added book {} at position {}", id, self.books.len());
        self.books.push(book);
        id
    }

    /// Remove the book at `index`, shifting later books left.
    ///
    /// An index past the end is ignored and the library is left untouched.
    pub fn remove_at(&mut self, index: usize) -> Option<Book> {
        if index >= self.books.len() {
            warn!("remove_at({}) ignored: library holds {} books", index, self.books.len());
            return None;
        }
        let removed = self.books.remove(index);
        debug!("removed book {} from position {}", removed.id(), index);
        Some(removed)
    }

    /// Flip the read flag of the book at `index`, returning the new state
    pub fn toggle_read_at(&mut self, index: usize) -> Option<bool> {
        let Some(book) = self.books.get_mut(index) else {
            warn!("toggle_read_at({}) ignored: library holds {} books", index, self.books.len());
            return None;
        };
        book.toggle_read();
        debug!("book {} read={}", book.id(), book.read);
        Some(book.read)
    }

    /// Current contents, in display order
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(library: &Library) -> Vec<&str> {
        library.all().iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut library = Library::new();
        for title in ["A", "B", "C", "D"] {
            library.add(Book::new(title, "Anon", "", false));
        }
        assert_eq!(library.len(), 4);
        assert_eq!(titles(&library), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_add_stamps_increasing_ids() {
        let mut library = Library::new();
        let a = library.add(Book::new("A", "", "", false));
        let b = library.add(Book::new("B", "", "", false));
        assert_eq!((a, b), (1, 2));
        assert_eq!(library.all()[1].id(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut library = Library::new();
        library.add(Book::new("A", "", "", false));
        let b = library.add(Book::new("B", "", "", false));
        library.remove_at(1);
        let c = library.add(Book::new("C", "", "", false));
        assert!(c > b);
    }

    #[test]
    fn test_remove_middle_shifts_later_books() {
        let mut library = Library::with_books([
            Book::new("A", "", "", false),
            Book::new("B", "", "", false),
            Book::new("C", "", "", false),
        ]);

        let removed = library.remove_at(1).expect("index 1 exists");
        assert_eq!(removed.title, "B");
        assert_eq!(library.len(), 2);
        assert_eq!(titles(&library), vec!["A", "C"]);
        assert_eq!(library.get(1).map(|b| b.title.as_str()), Some("C"));
    }

    #[test]
    fn test_remove_every_valid_index() {
        let source = ["A", "B", "C", "D", "E"];
        for i in 0..source.len() {
            let mut library =
                Library::with_books(source.iter().map(|t| Book::new(*t, "", "", false)));
            library.remove_at(i);

            let mut expected = source.to_vec();
            expected.remove(i);
            assert_eq!(library.len(), source.len() - 1);
            assert_eq!(titles(&library), expected);
        }
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut library = Library::with_books([
            Book::new("A", "", "", false),
            Book::new("B", "", "", true),
        ]);
        let before = library.all().to_vec();

        assert!(library.remove_at(5).is_none());
        assert!(library.remove_at(2).is_none());
        assert_eq!(library.all(), before.as_slice());
    }

    #[test]
    fn test_remove_from_empty_library() {
        let mut library = Library::new();
        assert!(library.remove_at(0).is_none());
        assert!(library.is_empty());
    }

    #[test]
    fn test_toggle_read_at() {
        let mut library = Library::with_books([Book::new("Dune", "Herbert", "412", false)]);
        assert_eq!(library.toggle_read_at(0), Some(true));
        assert_eq!(library.toggle_read_at(0), Some(false));
        assert_eq!(library.toggle_read_at(3), None);
        assert!(!library.all()[0].read);
    }
}
