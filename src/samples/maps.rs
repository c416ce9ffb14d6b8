//! Map samples: hash-backed and sort-backed key/value stores.
//!
//! Each sample has a builder that returns the populated container (so tests
//! can check it) and a `run_*` function that narrates it into a `Transcript`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::SampleError;
use crate::records::{Book, Student};
use crate::store::{KeyLookup, KeyValueStore};
use crate::transcript::Transcript;

pub type FavouriteFilms = HashMap<String, String>;
pub type Ages = HashMap<String, i32>;
pub type BookCatalogue = FxHashMap<i64, Book>;
pub type SortedCatalogue = BTreeMap<i64, Book>;
pub type Friends = HashMap<String, Vec<String>>;
pub type FavouriteBooks = HashMap<Student, Book>;
pub type UserAttributes = HashMap<String, HashMap<String, String>>;

/// Inserts and logs when an existing entry was replaced.
fn put_noting<K, V, M>(map: &mut M, key: K, value: V) -> Option<V>
where
    K: fmt::Display + Clone,
    V: fmt::Debug,
    M: KeyValueStore<K, V> + ?Sized,
{
    let displaced = map.put(key.clone(), value);
    if let Some(old) = &displaced {
        debug!(key = %key, displaced = ?old, "replaced existing entry");
    }
    displaced
}

// =============================================================================
// HashMap: String => String
// =============================================================================

pub fn favourite_films() -> FavouriteFilms {
    let mut films = FavouriteFilms::new();
    put_noting(&mut films, "John".to_string(), "Alien".to_string());
    put_noting(&mut films, "Anne".to_string(), "LaLa Land".to_string());
    put_noting(&mut films, "Zoe".to_string(), "Alien".to_string());
    // Same key again: Trainspotting replaces Alien for Zoe.
    put_noting(&mut films, "Zoe".to_string(), "Trainspotting".to_string());
    films
}

pub fn favourite_of<'a>(films: &'a FavouriteFilms, name: &str) -> Option<&'a str> {
    films.get(name).map(String::as_str)
}

/// Reverse lookup: everyone whose favourite is `film`, sorted by name.
///
/// This walks every entry; a map only gives fast access by key.
pub fn fans_of<'a>(films: &'a FavouriteFilms, film: &str) -> Vec<&'a str> {
    films
        .iter()
        .filter(|(_, favourite)| favourite.as_str() == film)
        .map(|(name, _)| name.as_str())
        .sorted()
        .collect()
}

pub fn run_favourite_films(t: &mut Transcript) -> Result<(), SampleError> {
    let mut films = favourite_films();

    let anne = favourite_of(&films, "Anne").ok_or_else(|| SampleError::missing_key("Anne"))?;
    t.line(format!("Anne's favourite film is: {}", anne));

    t.section("Contents of key set");
    t.line(films.keys().join(", "));

    t.section("Map<Key:Value> pairs");
    for key in films.keys() {
        if let Some(film) = films.lookup(key) {
            t.line(format!("{} : {}", key, film));
        }
    }

    t.section("Alternative way to output all entries in a Map");
    for (name, film) in &films {
        t.line(format!("Person: {}, Film: {}", name, film));
    }

    t.section("Exercises");
    t.line(format!("Fans of Alien: [{}]", fans_of(&films, "Alien").join(", ")));
    match films.remove("John") {
        Some(film) => t.line(format!("Removed John (favourite was {})", film)),
        None => t.line("John was not in the map"),
    }
    match favourite_of(&films, "John") {
        Some(film) => t.line(format!("John's favourite film is: {}", film)),
        None => t.line("John's film details are not in the map"),
    }
    let fans = fans_of(&films, "Alien");
    if fans.is_empty() {
        t.line("Nobody has Alien as a favourite film");
    } else {
        t.line(format!("Fans of Alien: [{}]", fans.join(", ")));
    }
    t.line(format!("Entries remaining: {}", films.len()));

    t.key_point("Putting an existing key replaces its value (last write wins)");
    t.key_point("Putting an existing value under a new key just adds an entry");
    t.key_point("get() returns None for an absent key");
    t.key_point("HashMap iteration order is unspecified");
    Ok(())
}

// =============================================================================
// HashMap: String => i32
// =============================================================================

pub fn ages() -> Ages {
    let mut ages = Ages::new();
    put_noting(&mut ages, "John".to_string(), 18);
    put_noting(&mut ages, "Anne".to_string(), 19);
    put_noting(&mut ages, "Adam".to_string(), 17);
    put_noting(&mut ages, "Adam".to_string(), 99);
    ages
}

pub fn run_ages(t: &mut Transcript) -> Result<(), SampleError> {
    let ages = ages();

    for (name, age) in &ages {
        t.line(format!("{} : {}", name, age));
    }

    for key in ["Anne", "Bill"] {
        if ages.contains_key(key) {
            let age = ages.get(key).ok_or_else(|| SampleError::missing_key(key))?;
            t.line(format!("ages contains the key {} with value {}", key, age));
        } else {
            t.line(format!("ages does NOT contain the key {}", key));
        }
    }

    t.key_point("Values can be plain integers; no boxing needed");
    t.key_point("contains_key() answers membership without fetching the value");
    Ok(())
}

// =============================================================================
// FxHashMap: i64 => Book
// =============================================================================

/// Fills any key/value store with the sample books.
///
/// Key 222222 is written twice, so "Ted" replaces "White Teeth".
pub fn stock_catalogue<M>(books: &mut M)
where
    M: KeyValueStore<i64, Book> + ?Sized,
{
    put_noting(books, 200034, Book::new(30004, "Fight Club"));
    put_noting(books, 600035, Book::new(40023, "Jaws"));
    put_noting(books, 222222, Book::new(55523, "White Teeth"));
    put_noting(books, 222222, Book::new(66623, "Ted"));
}

pub fn book_catalogue() -> BookCatalogue {
    let mut books = BookCatalogue::default();
    stock_catalogue(&mut books);
    books
}

fn describe_books(t: &mut Transcript, books: &dyn KeyValueStore<i64, Book>) {
    for (key, book) in books.entries() {
        t.line(format!(
            "Key: {} Title: {}, Code: {}",
            key,
            book.title(),
            book.code()
        ));
    }
}

pub fn run_book_catalogue(t: &mut Transcript) -> Result<(), SampleError> {
    let books = book_catalogue();
    describe_books(t, &books);
    t.line(format!("{} books stored for 4 puts", books.len()));

    t.key_point("FxHashMap swaps SipHash for a faster hasher on integer keys");
    t.key_point("The second put for key 222222 replaced the first book");
    Ok(())
}

// =============================================================================
// HashMap: String => Vec<String>
// =============================================================================

pub fn friends() -> Friends {
    let mut friends = Friends::new();
    // Each person gets a Vec of their own.
    friends.insert(
        "John".to_string(),
        vec!["Kylie".to_string(), "Donald".to_string()],
    );
    friends.insert(
        "Julie".to_string(),
        vec!["Barak".to_string(), "James".to_string(), "Megan".to_string()],
    );
    friends
}

/// Appends to one person's list, creating it on first use.
pub fn add_friend(friends: &mut Friends, person: &str, friend: &str) {
    friends
        .entry(person.to_string())
        .or_default()
        .push(friend.to_string());
}

/// The person with the most friends; ties go to the alphabetically first name.
pub fn most_friends(friends: &Friends) -> Option<(&str, &[String])> {
    friends
        .iter()
        .max_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| b.0.cmp(a.0)))
        .map(|(name, list)| (name.as_str(), list.as_slice()))
}

pub fn run_friends(t: &mut Transcript) -> Result<(), SampleError> {
    let mut friends = friends();

    for (person, list) in &friends {
        t.line(format!("Person: {}, Friends: {:?}", person, list));
    }

    t.section("Adding a friend to Julie's list");
    add_friend(&mut friends, "Julie", "Simon");
    for key in ["John", "Julie"] {
        let list = friends.get(key).ok_or_else(|| SampleError::missing_key(key))?;
        t.line(format!("{} : {:?}", key, list));
    }

    t.section("Most friends");
    if let Some((name, list)) = most_friends(&friends) {
        t.line(format!("{} has {} friends: {}", name, list.len(), list.join(", ")));
    }

    t.key_point("Each key owns its own Vec; pushing to one never touches another");
    t.key_point("entry().or_default() creates the list for a new person");
    Ok(())
}

// =============================================================================
// Passing a map into a function
// =============================================================================

/// Books whose title has at most `max_len` characters, ordered by code.
///
/// `books` is borrowed: the caller's map is read in place and left untouched,
/// and the result is a freshly allocated Vec.
pub fn short_titled_books<M>(books: &M, max_len: usize) -> Vec<Book>
where
    M: KeyValueStore<i64, Book> + ?Sized,
{
    let mut short: Vec<Book> = books
        .entries()
        .filter(|(_, book)| book.title_len() <= max_len)
        .map(|(_, book)| book.clone())
        .collect();
    short.sort_by_key(Book::code);
    short
}

pub fn run_passing_map(t: &mut Transcript, max_len: usize) -> Result<(), SampleError> {
    let mut books: HashMap<i64, Book> = HashMap::new();

    // &mut borrow: the callee fills the caller's map, nothing is copied.
    stock_catalogue(&mut books);
    t.line(format!("Caller's map now holds {} books", books.len()));

    let short = short_titled_books(&books, max_len);
    t.section(format!("Books with short titles (<= {} characters)", max_len));
    for book in &short {
        t.line(format!("Title: {}, Code: {}", book.title(), book.code()));
    }
    t.line(format!(
        "Source map still holds {} books after filtering",
        books.len()
    ));

    t.key_point("&mut lets a function change the caller's map in place");
    t.key_point("& lets a function read it without taking ownership");
    t.key_point("The filtered result is a new Vec; the map is unchanged");
    Ok(())
}

// =============================================================================
// BTreeMap: i64 => Book
// =============================================================================

pub fn sorted_catalogue() -> SortedCatalogue {
    let mut books = SortedCatalogue::new();
    stock_catalogue(&mut books);
    books
}

pub fn run_sorted_catalogue(t: &mut Transcript) -> Result<(), SampleError> {
    let books = sorted_catalogue();
    t.line("Note that output is in order of key");
    describe_books(t, &books);

    if let (Some((low, _)), Some((high, _))) = (books.first_key_value(), books.last_key_value()) {
        t.line(format!("Lowest key: {}, highest key: {}", low, high));
    }

    t.key_point("BTreeMap keeps keys sorted; iteration is ascending");
    t.key_point("Same replace-on-put behaviour as HashMap, O(log n) access");
    Ok(())
}

// =============================================================================
// HashMap: Student => Book
// =============================================================================

pub fn favourite_books() -> FavouriteBooks {
    let mut favourites = FavouriteBooks::new();
    favourites.insert(
        Student::new(1001, "Tom Malone"),
        Book::new(30004, "Lazy Days"),
    );
    favourites.insert(
        Student::new(2002, "Zoe Salanda"),
        Book::new(40023, "Columbiana"),
    );
    favourites
}

pub fn run_favourite_books(t: &mut Transcript) -> Result<(), SampleError> {
    let favourites = favourite_books();

    t.line("Student=>Book mappings");
    for (student, book) in &favourites {
        t.line(format!(
            "{} loves : Title: {}, Code: {}",
            student,
            book.title(),
            book.code()
        ));
    }

    t.section("Lookups with freshly built keys");
    let tom = Student::new(1001, "Tom Malone");
    let book = favourites
        .get(&tom)
        .ok_or_else(|| SampleError::missing_key(&tom))?;
    t.line(format!("{} found by value: {}", tom, book));

    let renamed = tom.with_name("Thomas Malone");
    match favourites.get(&renamed) {
        Some(book) => t.line(format!("{} found: {}", renamed, book)),
        None => t.line(format!("{} not found", renamed)),
    }

    t.key_point("Keys are matched with Hash + Eq on (id, name), not identity");
    t.key_point("Student has no setters; with_name() returns a new key");
    Ok(())
}

// =============================================================================
// HashMap: String => HashMap<String, String>
// =============================================================================

pub fn user_attributes() -> UserAttributes {
    let mut users = UserAttributes::new();

    let john = HashMap::from([
        ("Hair".to_string(), "Red".to_string()),
        ("Height".to_string(), "1.76".to_string()),
    ]);
    users.insert("John".to_string(), john);

    let alice = HashMap::from([
        ("Hair".to_string(), "Black".to_string()),
        ("Height".to_string(), "1.76".to_string()),
        ("Age".to_string(), "21".to_string()),
    ]);
    users.insert("Alice".to_string(), alice);

    users
}

/// Empties every inner map. Outer keys stay, each with an empty map.
pub fn clear_attributes(users: &mut UserAttributes) {
    for attributes in users.values_mut() {
        attributes.clear();
    }
}

pub fn run_user_attributes(t: &mut Transcript) -> Result<(), SampleError> {
    let mut users = user_attributes();
    let before = users.len();

    for (name, attributes) in &users {
        t.line(format!("User: {}", name));
        for (attribute, value) in attributes {
            t.line(format!("  {} : {}", attribute, value));
        }
    }

    t.section("After clearing each inner map");
    clear_attributes(&mut users);
    for (name, attributes) in &users {
        t.line(format!("User: {} has {} attributes", name, attributes.len()));
    }
    t.line(format!("Users before: {}, after: {}", before, users.len()));

    t.key_point("A map value can itself be a map (one user => many attributes)");
    t.key_point("Clearing an inner map leaves its outer entry in place");
    Ok(())
}
