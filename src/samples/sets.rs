//! Set samples: duplicates are rejected, order depends on the backing store.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use tracing::debug;

use crate::error::SampleError;
use crate::ordering::{BookTitleCode, ComparatorSet};
use crate::records::Book;
use crate::store::ElementStore;
use crate::transcript::Transcript;

/// Adds every item, returning how many were rejected as duplicates.
fn fill<T, S>(set: &mut S, items: impl IntoIterator<Item = T>) -> usize
where
    T: fmt::Display,
    S: ElementStore<T> + ?Sized,
{
    let mut rejected = 0;
    for item in items {
        let shown = item.to_string();
        if !set.add(item) {
            debug!(element = %shown, "duplicate rejected");
            rejected += 1;
        }
    }
    rejected
}

/// Accepts any set of strings, hash-backed or sorted.
pub fn display_set(t: &mut Transcript, set: &dyn ElementStore<String>) {
    for name in set.elements() {
        t.line(name.clone());
    }
}

fn display_books(t: &mut Transcript, set: &dyn ElementStore<Book>) {
    for book in set.elements() {
        t.line(book.to_string());
    }
}

/// The seven books every book-set sample adds; the second "Jaws" is a duplicate.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new(9999, "Jaws"),
        Book::new(9999, "Jaws"),
        Book::new(9999, "Stardust"),
        Book::new(2222, "Heist"),
        Book::new(4444, "Alien"),
        Book::new(1111, "Tatoos"),
        Book::new(3333, "Life on Earth"),
    ]
}

// =============================================================================
// HashSet<String>
// =============================================================================

pub fn hash_set_of_strings() -> HashSet<String> {
    let mut names: HashSet<String> = HashSet::new();
    fill(
        &mut names,
        ["Zoe", "Donald", "John", "Bill", "Bill", "Adam", "Niamh"].map(String::from),
    );
    names.remove("Donald");
    names
}

pub fn run_hash_set_of_strings(t: &mut Transcript) -> Result<(), SampleError> {
    let names = hash_set_of_strings();

    if names.contains("John") {
        t.line("John is in the set");
    }
    t.line(format!("Donald removed: {}", !names.contains("Donald")));

    t.section("Names from the HashSet - no duplicates, and NOT in order");
    display_set(t, &names);

    t.key_point("insert() returns false for a duplicate and leaves the set unchanged");
    t.key_point("contains() is an O(1) hash lookup using Hash + Eq");
    Ok(())
}

// =============================================================================
// BTreeSet<String>
// =============================================================================

pub fn tree_set_of_strings() -> BTreeSet<String> {
    let mut cars: BTreeSet<String> = BTreeSet::new();
    fill(
        &mut cars,
        ["Nissan", "BMW", "Audi", "Audi", "Jaguar"].map(String::from),
    );
    cars
}

pub fn run_tree_set_of_strings(t: &mut Transcript) -> Result<(), SampleError> {
    let cars = tree_set_of_strings();

    t.section("Cars from the BTreeSet - no duplicates, sorted in order");
    display_set(t, &cars);

    t.key_point("BTreeSet orders strings by their Ord implementation");
    t.key_point("display_set() took the same &dyn ElementStore as for HashSet");
    Ok(())
}

// =============================================================================
// BTreeSet<Book>, natural order
// =============================================================================

pub fn tree_set_of_books() -> BTreeSet<Book> {
    let mut books: BTreeSet<Book> = BTreeSet::new();
    fill(&mut books, sample_books());
    books
}

pub fn run_tree_set_of_books(t: &mut Transcript) -> Result<(), SampleError> {
    let mut books = tree_set_of_books();

    t.section("Books from the BTreeSet - no duplicates, in order (by code then title)");
    display_books(t, &books);

    t.section("Adding Book(1111, Jaws) and Book(9999, JAws)");
    fill(
        &mut books,
        [Book::new(1111, "Jaws"), Book::new(9999, "JAws")],
    );
    display_books(t, &books);

    t.key_point("Book implements Ord: code first, then title");
    t.key_point("Uppercase letters sort before lowercase ones");
    Ok(())
}

// =============================================================================
// ComparatorSet<Book, BookTitleCode>
// =============================================================================

pub fn tree_set_with_comparator() -> ComparatorSet<Book, BookTitleCode> {
    let mut books: ComparatorSet<Book, BookTitleCode> = ComparatorSet::new();
    fill(&mut books, sample_books());
    books
}

pub fn run_tree_set_with_comparator(t: &mut Transcript) -> Result<(), SampleError> {
    let books = tree_set_with_comparator();

    t.section("Books sorted by title then code - using BookTitleCode");
    display_books(t, &books);

    t.key_point("The comparator is chosen when the set is created");
    t.key_point("It overrides Book's own Ord for both ordering and duplicates");
    Ok(())
}

// =============================================================================
// HashSet<Book>
// =============================================================================

pub fn hash_set_of_books() -> HashSet<Book> {
    let mut books: HashSet<Book> = HashSet::new();
    let rejected = fill(&mut books, sample_books());
    debug!(rejected, stored = books.len(), "filled hash set of books");
    books
}

pub fn run_hash_set_of_books(t: &mut Transcript) -> Result<(), SampleError> {
    let books = hash_set_of_books();

    t.section("Books from the HashSet - no duplicates, NO order");
    display_books(t, &books);
    t.line(format!("{} books stored", books.len()));

    t.key_point("Book derives Hash + Eq over both fields");
    t.key_point("Not even insertion order is kept");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<&'a str> {
        books.into_iter().map(Book::title).collect()
    }

    #[test]
    fn test_hash_set_of_strings() {
        let names = hash_set_of_strings();
        assert_eq!(names.len(), 5);
        assert!(names.contains("John"));
        assert!(names.contains("Bill"));
        assert!(!names.contains("Donald"));
    }

    #[test]
    fn test_fill_counts_duplicates() {
        let mut names: HashSet<String> = HashSet::new();
        let rejected = fill(&mut names, ["Bill", "Bill", "Adam"].map(String::from));
        assert_eq!(rejected, 1);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_tree_set_of_strings_sorted() {
        let cars: Vec<String> = tree_set_of_strings().into_iter().collect();
        assert_eq!(cars, vec!["Audi", "BMW", "Jaguar", "Nissan"]);
    }

    #[test]
    fn test_tree_set_of_books_natural_order() {
        let books = tree_set_of_books();
        let codes: Vec<i32> = books.iter().map(Book::code).collect();

        assert_eq!(books.len(), 6);
        assert_eq!(codes, vec![1111, 2222, 3333, 4444, 9999, 9999]);
        assert_eq!(
            titles(&books),
            vec!["Tatoos", "Heist", "Life on Earth", "Alien", "Jaws", "Stardust"]
        );
    }

    #[test]
    fn test_extra_books_land_in_natural_order() {
        let mut books = tree_set_of_books();
        fill(&mut books, [Book::new(1111, "Jaws"), Book::new(9999, "JAws")]);

        let order: Vec<(i32, &str)> = books.iter().map(|b| (b.code(), b.title())).collect();
        assert_eq!(order[0], (1111, "Jaws"));
        assert_eq!(order[1], (1111, "Tatoos"));
        assert_eq!(order[5], (9999, "JAws"));
        assert_eq!(order[6], (9999, "Jaws"));
    }

    #[test]
    fn test_comparator_set_order() {
        let books = tree_set_with_comparator();
        assert_eq!(
            titles(&books),
            vec!["Alien", "Heist", "Jaws", "Life on Earth", "Stardust", "Tatoos"]
        );
    }

    #[test]
    fn test_switching_comparator_keeps_membership() {
        let natural = tree_set_of_books();
        let by_title = tree_set_with_comparator();
        let hashed = hash_set_of_books();

        assert_eq!(natural.len(), by_title.len());
        assert_eq!(hashed.len(), natural.len());
        for book in &by_title {
            assert!(natural.contains(book));
            assert!(hashed.contains(book));
        }
    }

    #[test]
    fn test_display_set_accepts_both_variants() {
        let mut t = Transcript::new("sets");
        display_set(&mut t, &tree_set_of_strings());
        display_set(&mut t, &hash_set_of_strings());
        assert_eq!(t.lines.len(), 9);
        assert_eq!(&t.lines[..4], &["Audi", "BMW", "Jaguar", "Nissan"]);
    }

    #[test]
    fn test_run_hash_set_of_strings() {
        let mut t = Transcript::new("names");
        run_hash_set_of_strings(&mut t).unwrap();
        assert!(t.contains_line("John is in the set"));
        assert!(t.contains_line("Donald removed: true"));
    }
}
