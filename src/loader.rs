//! Loading the delimited source file.
//!
//! Each line is `surname;name;patronymic`. Lines with any other field count
//! are skipped with a warning rather than failing the load — the data set
//! is hand-maintained and one stray line should not take the whole
//! directory down. Blank lines are ignored silently.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::record::RawEntry;

/// Number of delimiter-separated fields a well-formed line carries.
pub const FIELDS_PER_LINE: usize = 3;

/// Errors surfaced while reading the source file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read database file: {0}")]
    Io(#[from] std::io::Error),
}

/// Read raw entries from `path`, skipping malformed lines.
///
/// An unreadable file is an error; an empty file is an empty (and valid)
/// entry list.
pub fn load_entries(path: &Path, delimiter: char) -> Result<Vec<RawEntry>, LoadError> {
    let text = fs::read_to_string(path)?;
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(delimiter).collect();
        if fields.len() != FIELDS_PER_LINE {
            skipped += 1;
            warn!(line = line_no + 1, fields = fields.len(), "line_skipped");
            continue;
        }
        entries.push(RawEntry {
            surname: fields[0].to_string(),
            name: fields[1].to_string(),
            patronymic: fields[2].to_string(),
        });
    }

    info!(
        path = %path.display(),
        loaded = entries.len(),
        skipped,
        "load_complete"
    );

    Ok(entries)
}
