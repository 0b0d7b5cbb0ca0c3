//! Raw directory entries and the derived records built from them.

use serde::{Deserialize, Serialize};

use crate::hash::hash_name;
use crate::normalize::normalize;

/// A raw `(surname, name, patronymic)` triple as read from the source file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawEntry {
    pub surname: String,
    pub name: String,
    pub patronymic: String,
}

impl RawEntry {
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        patronymic: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            patronymic: patronymic.into(),
        }
    }
}

/// A derived directory record: the canonical full and short name strings
/// plus their hashes. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// `"SURNAME NAME PATRONYMIC"`, each field normalized independently.
    pub full_name: String,
    /// `"SURNAME N.P."`, or just the surname when the name or patronymic
    /// is empty after normalization.
    pub short_name: String,
    pub full_hash: u32,
    pub short_hash: u32,
}

impl Record {
    pub fn from_entry(entry: &RawEntry) -> Self {
        build_record(&entry.surname, &entry.name, &entry.patronymic)
    }
}

/// Build a record from a raw triple.
///
/// The three fields are normalized independently, then joined with single
/// spaces for the full form. The short form takes the first *character* of
/// the normalized name and patronymic (first byte would split a multi-byte
/// letter), each followed by a period. There are no failure modes: an empty
/// surname yields a degenerate but well-defined record.
pub fn build_record(surname: &str, name: &str, patronymic: &str) -> Record {
    let surname = normalize(surname);
    let name = normalize(name);
    let patronymic = normalize(patronymic);

    let full_name = format!("{surname} {name} {patronymic}");
    let short_name = match (name.chars().next(), patronymic.chars().next()) {
        (Some(n), Some(p)) => format!("{surname} {n}.{p}."),
        _ => surname,
    };

    Record {
        full_hash: hash_name(&full_name),
        short_hash: hash_name(&short_name),
        full_name,
        short_name,
    }
}
