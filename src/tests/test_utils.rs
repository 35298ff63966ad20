//! Shared test utilities for snowflake tests

use std::collections::HashSet;

use crate::{generate_at, Snowflake, SnowflakeOptions};

/// Generate and parse back in one step
pub fn gen_id(time: i64, options: SnowflakeOptions) -> Snowflake {
    generate_at(time, options)
        .expect("inputs should be in range")
        .parse()
        .expect("generated string should be decimal")
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[Snowflake], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert IDs never decrease in the order given
pub fn assert_non_decreasing(ids: &[Snowflake]) {
    for i in 1..ids.len() {
        assert!(
            ids[i] >= ids[i - 1],
            "ID at position {} ({}) is smaller than previous ID ({})",
            i,
            ids[i],
            ids[i - 1]
        );
    }
}

/// Assert a string is a canonical unsigned decimal
pub fn assert_canonical_decimal(s: &str) {
    assert!(!s.is_empty(), "empty decimal string");
    assert!(
        s.bytes().all(|b| b.is_ascii_digit()),
        "non-digit in {s:?}"
    );
    assert!(s == "0" || !s.starts_with('0'), "leading zero in {s:?}");
}
