//! The runnable samples and the selector that picks one.

pub mod maps;
pub mod sets;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use crate::config::Settings;
use crate::error::{ConfigError, SampleError};
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sample {
    /// HashMap: String => String
    #[default]
    FavouriteFilms,
    /// HashMap: String => i32
    Ages,
    /// FxHashMap: i64 => Book
    BookCatalogue,
    /// HashMap: String => Vec<String>
    Friends,
    /// Passing a map into a function
    PassingMap,
    /// BTreeMap: i64 => Book
    SortedCatalogue,
    /// HashMap: Student => Book
    FavouriteBooks,
    /// HashMap: String => HashMap<String, String>
    UserAttributes,
    /// HashSet of strings
    HashSetOfStrings,
    /// BTreeSet of strings
    TreeSetOfStrings,
    /// BTreeSet of books, natural order
    TreeSetOfBooks,
    /// Sorted set of books with the title-then-code comparator
    TreeSetWithComparator,
    /// HashSet of books
    HashSetOfBooks,
}

impl Sample {
    pub const ALL: [Sample; 13] = [
        Sample::FavouriteFilms,
        Sample::Ages,
        Sample::BookCatalogue,
        Sample::Friends,
        Sample::PassingMap,
        Sample::SortedCatalogue,
        Sample::FavouriteBooks,
        Sample::UserAttributes,
        Sample::HashSetOfStrings,
        Sample::TreeSetOfStrings,
        Sample::TreeSetOfBooks,
        Sample::TreeSetWithComparator,
        Sample::HashSetOfBooks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sample::FavouriteFilms => "favourite-films",
            Sample::Ages => "ages",
            Sample::BookCatalogue => "book-catalogue",
            Sample::Friends => "friends",
            Sample::PassingMap => "passing-map",
            Sample::SortedCatalogue => "sorted-catalogue",
            Sample::FavouriteBooks => "favourite-books",
            Sample::UserAttributes => "user-attributes",
            Sample::HashSetOfStrings => "hash-set-of-strings",
            Sample::TreeSetOfStrings => "tree-set-of-strings",
            Sample::TreeSetOfBooks => "tree-set-of-books",
            Sample::TreeSetWithComparator => "tree-set-with-comparator",
            Sample::HashSetOfBooks => "hash-set-of-books",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Sample::FavouriteFilms => "HashMap: String => String",
            Sample::Ages => "HashMap: String => i32",
            Sample::BookCatalogue => "FxHashMap: i64 => Book",
            Sample::Friends => "HashMap: String => Vec<String>",
            Sample::PassingMap => "Passing a Map into a Function",
            Sample::SortedCatalogue => "BTreeMap: i64 => Book",
            Sample::FavouriteBooks => "HashMap: Student => Book",
            Sample::UserAttributes => "HashMap: String => HashMap<String, String>",
            Sample::HashSetOfStrings => "HashSet<String>",
            Sample::TreeSetOfStrings => "BTreeSet<String>",
            Sample::TreeSetOfBooks => "BTreeSet<Book> (natural order)",
            Sample::TreeSetWithComparator => "ComparatorSet<Book, BookTitleCode>",
            Sample::HashSetOfBooks => "HashSet<Book>",
        }
    }

    pub fn run(self, settings: &Settings) -> Result<Transcript, SampleError> {
        info!(sample = self.name(), "running sample");
        let mut t = Transcript::new(self.title());
        t.sample = Some(self);

        match self {
            Sample::FavouriteFilms => maps::run_favourite_films(&mut t)?,
            Sample::Ages => maps::run_ages(&mut t)?,
            Sample::BookCatalogue => maps::run_book_catalogue(&mut t)?,
            Sample::Friends => maps::run_friends(&mut t)?,
            Sample::PassingMap => maps::run_passing_map(&mut t, settings.max_title_length)?,
            Sample::SortedCatalogue => maps::run_sorted_catalogue(&mut t)?,
            Sample::FavouriteBooks => maps::run_favourite_books(&mut t)?,
            Sample::UserAttributes => maps::run_user_attributes(&mut t)?,
            Sample::HashSetOfStrings => sets::run_hash_set_of_strings(&mut t)?,
            Sample::TreeSetOfStrings => sets::run_tree_set_of_strings(&mut t)?,
            Sample::TreeSetOfBooks => sets::run_tree_set_of_books(&mut t)?,
            Sample::TreeSetWithComparator => sets::run_tree_set_with_comparator(&mut t)?,
            Sample::HashSetOfBooks => sets::run_hash_set_of_books(&mut t)?,
        }

        info!(sample = self.name(), lines = t.lines.len(), "sample finished");
        Ok(t)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sample {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sample::ALL
            .into_iter()
            .find(|sample| sample.name() == s)
            .ok_or_else(|| ConfigError::UnknownSample(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for sample in Sample::ALL {
            assert_eq!(sample.name().parse::<Sample>().unwrap(), sample);
        }
    }

    #[test]
    fn test_names_match_clap() {
        for sample in Sample::ALL {
            let value = sample.to_possible_value().unwrap();
            assert_eq!(value.get_name(), sample.name());
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            "map9".parse::<Sample>(),
            Err(ConfigError::UnknownSample(name)) if name == "map9"
        ));
    }

    #[test]
    fn test_every_sample_runs() {
        let settings = Settings::default();
        for sample in Sample::ALL {
            let t = sample.run(&settings).unwrap();
            assert_eq!(t.title, sample.title());
            assert_eq!(t.sample, Some(sample));
            assert!(!t.lines.is_empty(), "{} produced no lines", sample);
            assert!(!t.key_points.is_empty(), "{} has no key points", sample);
        }
    }

    #[test]
    fn test_passing_map_uses_max_title_length() {
        let settings = Settings {
            max_title_length: 3,
            ..Settings::default()
        };
        let t = Sample::PassingMap.run(&settings).unwrap();
        assert!(t.contains_line("Title: Ted"));
        assert!(!t.contains_line("Title: Jaws"));
    }
}
