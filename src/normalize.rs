//! Character-level canonicalization of name fields and queries.
//!
//! One rule, applied per character: periods and spaces pass through
//! unchanged, alphabetic characters are kept in uppercase, everything else
//! is dropped. Classification and case mapping use the std Unicode tables,
//! so Latin and Cyrillic letters behave identically on every platform with
//! no locale dependence.

/// Canonicalize a raw name field or query string.
///
/// Character order is preserved and nothing is ever inserted. Uppercase
/// letters, `.` and ` ` all map to themselves, so the function is
/// idempotent.
///
/// # Examples
///
/// ```
/// use namedir::normalize;
///
/// assert_eq!(normalize("Ivan123!"), "IVAN");
/// assert_eq!(normalize("A.B C"), "A.B C");
/// assert_eq!(normalize("Иванов"), "ИВАНОВ");
/// ```
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '.' || ch == ' ' {
            out.push(ch);
        } else if ch.is_alphabetic() {
            // Uppercasing can expand one character into several
            // (e.g. German ß -> SS), so extend with the full mapping.
            out.extend(ch.to_uppercase());
        }
    }
    out
}
