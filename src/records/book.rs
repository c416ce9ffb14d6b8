use std::cmp::Ordering;
use std::fmt;

/// A book identified by its scanner code.
///
/// Natural order is by `code`, then by `title` ("title within code").
/// Equality and hashing use both fields so they agree with that order,
/// which lets the same type live in a `HashSet` and a `BTreeSet`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    code: i32,
    title: String,
}

impl Book {
    pub fn new(code: i32, title: impl Into<String>) -> Self {
        Book {
            code,
            title: title.into(),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title length in characters, not bytes.
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }
}

impl Ord for Book {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code
            .cmp(&other.code)
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book{{code={}, title={}}}", self.code, self.title)
    }
}
