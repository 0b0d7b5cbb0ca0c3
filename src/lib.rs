//! # namedir
//!
//! In-memory personal-name directory with hashed lookup.
//!
//! Raw `surname;name;patronymic` triples are normalized into canonical full
//! (`"SURNAME NAME PATRONYMIC"`) and short (`"SURNAME N.P."`) forms, both
//! djb2-hashed, and collected into a [`Directory`] sorted by
//! `(full_hash, short_hash)`. A lookup query goes through the same
//! normalizer, is classified as full or short form, and is matched by a
//! full linear scan that compares hashes first and pays for a string
//! comparison only on hash hits — both comparison counts come back in the
//! [`MatchResult`].
//!
//! ## Example
//!
//! ```
//! use namedir::{Directory, RawEntry, search};
//!
//! let directory = Directory::from_entries([
//!     RawEntry::new("Smith", "John", "Paul"),
//!     RawEntry::new("Brown", "James", "Henry"),
//! ]);
//!
//! let result = search(&directory, "Smith J.P.").unwrap();
//! assert_eq!(result.matches.len(), 1);
//! assert_eq!(result.matches[0].short_name, "SMITH J.P.");
//! assert_eq!(result.hash_comparisons, directory.len());
//! ```

pub mod directory;
pub mod hash;
pub mod loader;
pub mod matcher;
pub mod normalize;
pub mod query;
pub mod record;

#[cfg(feature = "cli")]
pub mod config;

pub use crate::directory::Directory;
pub use crate::hash::{HASH_SEED, hash_name};
pub use crate::loader::{FIELDS_PER_LINE, LoadError, load_entries};
pub use crate::matcher::{MatchResult, match_query};
pub use crate::normalize::normalize;
pub use crate::query::{ParsedQuery, QueryError, collapse_initial_dots, parse_query};
pub use crate::record::{RawEntry, Record, build_record};

#[cfg(feature = "cli")]
pub use crate::config::{ConfigLoadError, RunConfig};

/// Parse a raw query and match it against the directory in one call.
pub fn search(directory: &Directory, raw_query: &str) -> Result<MatchResult, QueryError> {
    let parsed = parse_query(raw_query)?;
    Ok(match_query(directory, &parsed))
}
