//! Hash-prefiltered linear matching with observable comparison counts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::directory::Directory;
use crate::query::ParsedQuery;
use crate::record::Record;

/// Result of matching one query against the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    /// Matching records, in directory (scan) order.
    pub matches: Vec<Record>,
    /// One per stored record; the scan never short-circuits.
    pub hash_comparisons: usize,
    /// One per record whose stored hash equals the query hash.
    pub string_comparisons: usize,
}

/// Scan the whole directory for records matching the parsed query.
///
/// Every record costs one hash comparison. Only records whose stored hash
/// matches the query hash pay the string comparison — hash pre-filtering
/// avoids string work, never the scan itself, so `hash_comparisons` always
/// equals the directory size.
pub fn match_query(directory: &Directory, query: &ParsedQuery) -> MatchResult {
    let mut matches = Vec::new();
    let mut hash_comparisons = 0usize;
    let mut string_comparisons = 0usize;

    for record in directory.iter() {
        hash_comparisons += 1;
        let (stored_hash, stored_name) = if query.is_short_form {
            (record.short_hash, record.short_name.as_str())
        } else {
            (record.full_hash, record.full_name.as_str())
        };
        if stored_hash == query.hash {
            string_comparisons += 1;
            if stored_name == query.canonical {
                matches.push(record.clone());
            }
        }
    }

    debug!(
        canonical = %query.canonical,
        short_form = query.is_short_form,
        hash_comparisons,
        string_comparisons,
        matched = matches.len(),
        "match_scan_complete"
    );

    MatchResult {
        matches,
        hash_comparisons,
        string_comparisons,
    }
}
