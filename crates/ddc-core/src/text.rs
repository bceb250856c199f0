// crates/ddc-core/src/text.rs

/// Convert a string into a folded key suitable for keyword matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Ụmụọjị` -> `Umuoji`)
/// 2\) Normalize to lowercase
///
/// User-supplied address text mixes English with Hausa, Yoruba and Igbo
/// spellings; folding keeps the rural keyword matching insensitive to both
/// case and diacritics.
///
/// # Examples
///
/// ```rust
/// use ddc_core::text::fold_key;
///
/// assert_eq!(fold_key("Sabon Gari"), "sabon gari");
/// assert_eq!(fold_key("ỤNGUWAR"), "unguwar");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding.
///
/// # Examples
///
/// ```rust
/// use ddc_core::text::equals_folded;
///
/// assert!(equals_folded("IKORODU", "Ikorodu"));
/// assert!(!equals_folded("Ikeja", "Ikorodu"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_diacritics() {
        assert_eq!(fold_key("Ọsun Village"), "osun village");
        assert_eq!(fold_key("NEAR the Mosque"), "near the mosque");
    }

    #[test]
    fn equality_is_fold_based() {
        assert!(equals_folded("Tudun Wada", "TUDUN WADA"));
    }
}
