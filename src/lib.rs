//! # Collections Samples
//!
//! Runnable samples showing how key/value maps and sets behave in Rust, and
//! what a type must provide to be stored in them.
//!
//! ## Samples Covered
//!
//! 1. **Hash maps** - last write wins, absent keys, `contains_key`
//! 2. **Maps of collections** - one owned `Vec` or inner map per key
//! 3. **Borrowing a map** - passing `&`/`&mut` across a function boundary
//! 4. **Sorted maps** - `BTreeMap` iterates in key order
//! 5. **Record keys** - `Hash` + `Eq` on a custom struct
//! 6. **Sets** - duplicates rejected, natural order vs a plugged-in comparator
//!
//! ## Running Samples
//!
//! ```bash
//! cargo run -- --list
//! cargo run -- favourite-films
//! cargo run -- tree-set-with-comparator
//! cargo run -- --all --format json
//! ```
//!
//! ## Key Dependencies
//!
//! - `rustc-hash` - `FxHashMap` for integer keys
//! - `thiserror` / `anyhow` - library and binary error handling
//! - `serde` + `toml` - settings file
//! - `tracing` - diagnostic logging

pub mod config;
pub mod error;
pub mod ordering;
pub mod records;
pub mod samples;
pub mod store;
pub mod transcript;

pub use config::{OutputFormat, Settings};
pub use error::{ConfigError, SampleError};
pub use ordering::{BookTitleCode, Comparator, ComparatorSet, NaturalOrder};
pub use records::{Book, Student};
pub use samples::Sample;
pub use store::{ElementStore, KeyLookup, KeyValueStore};
pub use transcript::Transcript;
