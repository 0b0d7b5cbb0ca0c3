//! Determinism guarantees: same input, same hashes, same stored order.

use namedir::{Directory, HASH_SEED, RawEntry, build_record, hash_name, normalize, parse_query};

fn sample_entries() -> Vec<RawEntry> {
    vec![
        RawEntry::new("Smith", "John", "Paul"),
        RawEntry::new("Brown", "James", "Henry"),
        RawEntry::new("Иванов", "Иван", "Иванович"),
        RawEntry::new("Петров", "Пётр", "Петрович"),
        RawEntry::new("Adams", "Ann", "May"),
    ]
}

#[test]
fn hash_is_deterministic_and_seeded() {
    assert_eq!(hash_name(""), HASH_SEED);
    for input in ["SMITH JOHN PAUL", "ИВАНОВ И.И.", "a", " . "] {
        assert_eq!(hash_name(input), hash_name(input));
    }
}

#[test]
fn hash_recurrence_over_ascii_suffixes() {
    let mut acc = hash_name("SMITH");
    let mut s = String::from("SMITH");
    for ch in [' ', 'J', '.', 'P', '.'] {
        s.push(ch);
        acc = acc.wrapping_mul(33).wrapping_add(ch as u32);
        assert_eq!(hash_name(&s), acc);
    }
}

#[test]
fn normalize_is_idempotent_over_the_sample() {
    for entry in sample_entries() {
        for field in [&entry.surname, &entry.name, &entry.patronymic] {
            let once = normalize(field);
            assert_eq!(normalize(&once), once);
        }
    }
}

#[test]
fn records_rebuild_identically() {
    for entry in sample_entries() {
        let a = build_record(&entry.surname, &entry.name, &entry.patronymic);
        let b = build_record(&entry.surname, &entry.name, &entry.patronymic);
        assert_eq!(a, b);
    }
}

#[test]
fn directory_order_is_stable_between_builds() {
    let a = Directory::from_entries(sample_entries());
    let b = Directory::from_entries(sample_entries());
    assert_eq!(a, b);

    let keys: Vec<(u32, u32)> = a.iter().map(|r| (r.full_hash, r.short_hash)).collect();
    assert!(keys.windows(2).all(|w| w[0] <= w[1]), "keys {keys:?}");
}

#[test]
fn query_parse_is_deterministic() {
    for raw in ["Smith John Paul", "Smith J.P", "Иванов И.И."] {
        let a = parse_query(raw).expect("parses");
        let b = parse_query(raw).expect("parses");
        assert_eq!(a, b);
        assert_eq!(a.hash, hash_name(&a.canonical));
    }
}

#[test]
fn stored_and_query_hashes_agree_on_the_same_canonical_form() {
    // The comparability anchor: a record and a query that canonicalize to
    // the same string must hash identically.
    let record = build_record("Smith", "John", "Paul");
    let query = parse_query("  smith   john  paul ").expect("parses");
    assert_eq!(query.canonical, record.full_name);
    assert_eq!(query.hash, record.full_hash);
}
