//! Static fixture values consumed by the built-in checks

use indexmap::IndexMap;

/// The three sample values shared by the fixtures, in order
pub const SAMPLE_VALUES: [i64; 3] = [111, 222, 333];

/// Keys of the sample mapping, in insertion order
pub const SAMPLE_KEYS: [&str; 3] = ["a", "b", "c"];

/// Build the sample mapping `{a: 111, b: 222, c: 333}`.
///
/// Keys are unique by construction and enumeration preserves insertion
/// order, which the mapping check relies on for its output lines.
pub fn sample_mapping() -> IndexMap<String, i64> {
    SAMPLE_KEYS
        .iter()
        .map(|key| key.to_string())
        .zip(SAMPLE_VALUES)
        .collect()
}
