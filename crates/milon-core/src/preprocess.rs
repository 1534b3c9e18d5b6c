use unicode_normalization::UnicodeNormalization;

/// Trim and NFC-normalize a query before it reaches a gateway. Hebrew with
/// nikkud arrives in mixed composed/decomposed forms depending on the input
/// method.
pub fn clean(text: &str) -> String {
    text.trim().nfc().collect()
}

/// Canonical form submitted to the lexicon endpoint.
pub fn normalize_query(text: &str) -> String {
    clean(text).to_lowercase()
}
