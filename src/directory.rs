//! The sorted, immutable collection of directory records.

use serde::{Deserialize, Serialize};

use crate::record::{RawEntry, Record};

/// All records, ordered ascending by `(full_hash, short_hash)`.
///
/// The ordering is presentation order only. Lookups scan linearly — the
/// comparison counters in [`MatchResult`](crate::MatchResult) are part of
/// the contract, so the scan must visit every record rather than exploit
/// the sort. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    /// Build the directory from raw entries and sort it.
    ///
    /// The sort is stable: records that tie on both hashes keep their input
    /// order, so the same input always produces the same stored order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let mut records: Vec<Record> = entries
            .into_iter()
            .map(|entry| Record::from_entry(&entry))
            .collect();
        records.sort_by_key(|r| (r.full_hash, r.short_hash));
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<RawEntry> {
        vec![
            RawEntry::new("Smith", "John", "Paul"),
            RawEntry::new("Brown", "James", "Henry"),
            RawEntry::new("Иванов", "Иван", "Иванович"),
            RawEntry::new("Adams", "Ann", "May"),
        ]
    }

    #[test]
    fn stored_order_is_non_decreasing_on_both_hashes() {
        let directory = Directory::from_entries(sample_entries());
        let keys: Vec<(u32, u32)> = directory
            .iter()
            .map(|r| (r.full_hash, r.short_hash))
            .collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]), "keys {keys:?}");
    }

    #[test]
    fn same_input_builds_identical_directories() {
        let a = Directory::from_entries(sample_entries());
        let b = Directory::from_entries(sample_entries());
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_entries_are_kept() {
        let directory = Directory::from_entries(vec![
            RawEntry::new("Smith", "John", "Paul"),
            RawEntry::new("Smith", "John", "Paul"),
        ]);
        assert_eq!(directory.len(), 2);
        let records = directory.records();
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn empty_input_builds_empty_directory() {
        let directory = Directory::from_entries(Vec::new());
        assert!(directory.is_empty());
        assert_eq!(directory.len(), 0);
        assert_eq!(directory.iter().count(), 0);
    }
}
