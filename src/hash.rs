//! Name hashing for stored records and queries.
//!
//! Stored hashes and query hashes must be directly comparable, so the
//! algorithm is fixed: the classic djb2 loop over the UTF-8 bytes of the
//! input with unsigned 32-bit wraparound.
//!
//! # Algorithm
//!
//! ```text
//! acc = 5381
//! for each byte b:  acc = ((acc << 5) + acc) + b      (mod 2^32)
//! ```
//!
//! `((acc << 5) + acc)` is `acc * 33`. The function is total and
//! deterministic over every string; the empty string hashes to the seed.

/// djb2 seed. An empty input hashes to exactly this value.
pub const HASH_SEED: u32 = 5381;

/// Hash a canonical name string to a 32-bit value.
///
/// # Examples
///
/// ```
/// use namedir::{hash_name, HASH_SEED};
///
/// assert_eq!(hash_name(""), HASH_SEED);
///
/// // Deterministic
/// assert_eq!(hash_name("SMITH J.P."), hash_name("SMITH J.P."));
/// ```
pub fn hash_name(s: &str) -> u32 {
    let mut acc = HASH_SEED;
    for &b in s.as_bytes() {
        acc = acc.wrapping_mul(33).wrapping_add(u32::from(b));
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_seed() {
        assert_eq!(hash_name(""), 5381);
    }

    #[test]
    fn known_single_byte_value() {
        // 5381 * 33 + 65
        assert_eq!(hash_name("A"), 177_638);
    }

    #[test]
    fn recurrence_holds_per_appended_byte() {
        for base in ["", "A", "SMITH", "SMITH J.P"] {
            for ch in ['A', 'Z', '.', ' '] {
                let extended = format!("{base}{ch}");
                let expected = hash_name(base)
                    .wrapping_mul(33)
                    .wrapping_add(ch as u32);
                assert_eq!(hash_name(&extended), expected, "base {base:?} + {ch:?}");
            }
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let inputs = ["", "SMITH JOHN PAUL", "ИВАНОВ И.И.", "a b c"];
        for input in inputs {
            assert_eq!(hash_name(input), hash_name(input));
        }
    }

    #[test]
    fn multibyte_input_hashes_bytewise() {
        // Two-byte UTF-8 characters fold in one byte at a time.
        let hash = "И".bytes().fold(HASH_SEED, |acc, b| {
            acc.wrapping_mul(33).wrapping_add(u32::from(b))
        });
        assert_eq!(hash_name("И"), hash);
    }
}
