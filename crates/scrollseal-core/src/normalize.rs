use unicode_normalization::UnicodeNormalization;

/// Returns the NFC (canonical composed) form of a verse.
///
/// Applied to every verse before hashing so that byte-identical text always
/// yields byte-identical leaf digests regardless of upstream encoding
/// variance (composed vs. decomposed diacritics). Total for valid Unicode.
pub fn nfc(text: &str) -> String {
    text.nfc().collect()
}
