//! Library + Reconciler Scenario Tests
//!
//! Drive the library through the reconciler the way the UI does.

use crate::reconciler::{dispatch, render};
use crate::{Book, BookForm, CardAction, Library, MemorySurface, Reconciled};

fn book(title: &str) -> Book {
    Book::new(title, "Anon", "100", false)
}

fn rendered_titles(surface: &MemorySurface) -> Vec<&str> {
    surface.cards().iter().map(|c| c.title.as_str()).collect()
}

#[test]
fn test_dune_toggle_scenario() {
    let mut library = Library::new();
    library.add(Book::new("Dune", "Herbert", "412", false));
    assert_eq!(library.all().len(), 1);
    assert_eq!(library.all()[0].title, "Dune");

    let mut surface = MemorySurface::new();
    render(&library, &mut surface);

    let result = dispatch(&mut library, &mut surface, CardAction::ToggleRead(0));
    assert_eq!(result, Reconciled::Toggled { index: 0, read: true });
    assert!(library.all()[0].read);
    assert!(surface.cards()[0].read);

    dispatch(&mut library, &mut surface, CardAction::ToggleRead(0));
    assert!(!library.all()[0].read);
    assert_eq!(surface.cards()[0].read_label(), "Not Read");
}

#[test]
fn test_toggle_is_point_update() {
    let mut library = Library::with_books([book("A"), book("B"), book("C")]);
    let mut surface = MemorySurface::new();
    render(&library, &mut surface);

    dispatch(&mut library, &mut surface, CardAction::ToggleRead(1));
    assert_eq!(surface.renders, 1);
    let read: Vec<bool> = surface.cards().iter().map(|c| c.read).collect();
    assert_eq!(read, vec![false, true, false]);
}

#[test]
fn test_remove_middle_rebuilds_and_rebinds() {
    let mut library = Library::with_books([book("A"), book("B"), book("C")]);
    let mut surface = MemorySurface::new();
    render(&library, &mut surface);

    let result = dispatch(&mut library, &mut surface, CardAction::Remove(1));
    assert!(matches!(result, Reconciled::Removed(ref b) if b.title == "B"));
    assert_eq!(surface.renders, 2);
    assert_eq!(rendered_titles(&surface), vec!["A", "C"]);

    // "C" is now bound to index 1
    assert_eq!(surface.cards()[1].index, 1);
    dispatch(&mut library, &mut surface, CardAction::Remove(1));
    assert_eq!(rendered_titles(&surface), vec!["A"]);
}

#[test]
fn test_remove_out_of_range_changes_nothing() {
    let mut library = Library::with_books([book("A"), book("B")]);
    let mut surface = MemorySurface::new();
    render(&library, &mut surface);

    let result = dispatch(&mut library, &mut surface, CardAction::Remove(5));
    assert_eq!(result, Reconciled::Ignored);
    assert_eq!(library.len(), 2);
    assert_eq!(surface.renders, 1);
    assert_eq!(rendered_titles(&surface), vec!["A", "B"]);
}

#[test]
fn test_toggle_out_of_range_changes_nothing() {
    let mut library = Library::with_books([book("A")]);
    let mut surface = MemorySurface::new();
    render(&library, &mut surface);

    assert_eq!(
        dispatch(&mut library, &mut surface, CardAction::ToggleRead(1)),
        Reconciled::Ignored
    );
    assert!(!surface.cards()[0].read);
}

#[test]
fn test_render_is_idempotent() {
    let mut library = Library::with_books([book("A"), book("B")]);
    library.toggle_read_at(0);
    let mut surface = MemorySurface::new();

    render(&library, &mut surface);
    let first = surface.cards().to_vec();
    render(&library, &mut surface);
    assert_eq!(surface.cards(), first.as_slice());
    assert_eq!(surface.renders, 2);
}

#[test]
fn test_form_submission_then_render() {
    let mut library = Library::new();
    let mut surface = MemorySurface::new();

    let form = BookForm {
        title: "Emma".to_string(),
        author: "Austen".to_string(),
        pages: "474".to_string(),
        read: true,
    };
    let id = library.add(form.submit().expect("valid form"));
    render(&library, &mut surface);

    let card = &surface.cards()[0];
    assert_eq!(card.book_id, id);
    assert_eq!(card.byline, "By Austen");
    assert_eq!(card.pages, "Pages: 474");
    assert_eq!(card.read_label(), "Read");
}
