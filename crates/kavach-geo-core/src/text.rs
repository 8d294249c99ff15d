// crates/kavach-geo-core/src/text.rs
use deunicode::deunicode;

/// Normalizes a name for comparison: ASCII transliteration, lowercase, trimmed.
///
/// ```rust
/// use kavach_geo_core::text::fold_key;
///
/// assert_eq!(fold_key("  Bengaluru Urban "), "bengaluru urban");
/// assert_eq!(fold_key("Mysuru"), fold_key("MYSŪRU"));
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode(s.trim()).to_lowercase()
}

/// Accent- and case-insensitive equality.
#[inline]
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert!(equals_folded("Bengaluru Urban", "bengaluru urban"));
        assert!(equals_folded("Mysūru", "Mysuru"));
        assert!(!equals_folded("Mysuru", "Mandya"));
    }
}
