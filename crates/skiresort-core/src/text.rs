// crates/skiresort-core/src/text.rs

/// Convert a string into a folded key suitable for fuzzy comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Sölden` -> `Solden`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use skiresort_core::text::fold_key;
///
/// assert_eq!(fold_key("Sölden"), "solden");
/// assert_eq!(fold_key("Val d'Isère"), "val d'isere");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
