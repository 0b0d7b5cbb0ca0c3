//! Query parsing: canonicalization, dotted-initial cleanup, and
//! short-vs-full form classification.
//!
//! A query goes through the same normalizer as stored records, then through
//! a cleanup that tolerates sloppy initial punctuation (`IVANOV I . I`,
//! `IVANOV I..I.`). The cleanup is three substitution passes in a fixed
//! order — `" ."`, then `". "`, then `".."`, each applied to a fixpoint,
//! every occurrence collapsing to a single `"."`. The passes are not
//! confluent for some pathological inputs, so the order itself is
//! observable behavior; it must not be reordered or merged into one
//! combined pass.
//!
//! Classification: exactly two tokens where the second is a 3- or
//! 4-character run containing `.` is a short form (`SMITH J.P.`, with a
//! missing trailing period restored); three or more tokens is a full form
//! (tokens past the third are ignored); anything else is
//! [`QueryError::InvalidFormat`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hash::hash_name;
use crate::normalize::normalize;

/// Errors produced while parsing a lookup query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query is neither a full name nor a surname-plus-initials short
    /// form. Recoverable: the caller reports it and keeps accepting
    /// queries.
    #[error("query is neither a full name nor a surname with initials")]
    InvalidFormat,
}

/// A classified query ready for matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedQuery {
    /// True when the query names surname + dotted initials; selects which
    /// stored hash/string pair the matcher compares against.
    pub is_short_form: bool,
    /// The canonical string compared for equality during matching.
    pub canonical: String,
    /// Hash of `canonical`.
    pub hash: u32,
}

/// Collapse dotted-initial artifacts left after normalization.
///
/// Three passes over the whole string, in this order, each run to a
/// fixpoint: `" ." -> "."`, then `". " -> "."`, then `".." -> "."`.
/// All three patterns are pure ASCII, so the byte offsets returned by
/// `find` are always valid splice points in UTF-8 text.
pub fn collapse_initial_dots(s: &str) -> String {
    let mut out = s.to_string();
    for pattern in [" .", ". ", ".."] {
        while let Some(pos) = out.find(pattern) {
            out.replace_range(pos..pos + pattern.len(), ".");
        }
    }
    out
}

fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch == ' ' {
            if !prev_space {
                out.push(ch);
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out
}

/// Parse and classify a raw query string.
pub fn parse_query(raw: &str) -> Result<ParsedQuery, QueryError> {
    let cleaned = collapse_initial_dots(&normalize(raw));
    let cleaned = collapse_spaces(&cleaned);
    let cleaned = cleaned.trim();

    // A lone "." can survive the cleanup when the query was only dots and
    // spaces; it is noise, not a token.
    let tokens: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|token| *token != ".")
        .collect();

    let is_short_form = tokens.len() == 2 && {
        let initials = tokens[1];
        let len = initials.chars().count();
        (len == 3 || len == 4) && initials.contains('.')
    };

    if is_short_form {
        // A 3-character second token is `X.Y` with the trailing period
        // missing; restore it so the string lines up with stored short
        // names. Character count, not byte count: Cyrillic initials are
        // two bytes each.
        let mut initials = tokens[1].to_string();
        if initials.chars().count() == 3 {
            initials.push('.');
        }
        let canonical = format!("{} {initials}", tokens[0]);
        return Ok(ParsedQuery {
            is_short_form: true,
            hash: hash_name(&canonical),
            canonical,
        });
    }

    if tokens.len() >= 3 {
        let canonical = format!("{} {} {}", tokens[0], tokens[1], tokens[2]);
        return Ok(ParsedQuery {
            is_short_form: false,
            hash: hash_name(&canonical),
            canonical,
        });
    }

    Err(QueryError::InvalidFormat)
}
