//! Base64 and base64url string values
//!
//! [`EncodedString`] tags a piece of text with the alphabet it was written
//! in and converts between the two alphabets and raw bytes. Construction
//! validates the alphabet; conversions themselves never fail.

use crate::codec;
use crate::errors::CredentialError;

/// A base64-encoded string tagged with its alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedString {
    /// Standard alphabet (`+`, `/`, `=` padding)
    Standard(String),
    /// URL-safe alphabet (`-`, `_`, no padding)
    UrlSafe(String),
}

impl EncodedString {
    /// Wrap text written in the standard alphabet.
    ///
    /// # Errors
    /// Returns [`CredentialError::Format`] if the text contains URL-safe
    /// alphabet characters (`-` or `_`).
    pub fn standard(text: impl Into<String>) -> Result<Self, CredentialError> {
        let text = text.into();
        if text.contains(['-', '_']) {
            return Err(CredentialError::Format(
                "string provided is not base64 encoded".to_string(),
            ));
        }
        Ok(Self::Standard(text))
    }

    /// Wrap text written in the URL-safe alphabet.
    ///
    /// # Errors
    /// Returns [`CredentialError::Format`] if the text contains standard
    /// alphabet characters (`+`, `/`, or `=`).
    pub fn url_safe(text: impl Into<String>) -> Result<Self, CredentialError> {
        let text = text.into();
        if text.contains(['+', '/', '=']) {
            return Err(CredentialError::Format(
                "string provided is not base64 url encoded".to_string(),
            ));
        }
        Ok(Self::UrlSafe(text))
    }

    /// Pick the variant matching the text's alphabet.
    ///
    /// The heuristic is asymmetric: text containing `-` or `_` is URL-safe
    /// and everything else is treated as standard. A short string drawn
    /// only from the shared alphabet is ambiguous and classifies as
    /// standard; callers that always pass URL-safe text (credential IDs in
    /// practice) are unaffected.
    ///
    /// # Errors
    /// Returns [`CredentialError::Format`] if the text mixes characters
    /// from both alphabets.
    pub fn detect(text: impl Into<String>) -> Result<Self, CredentialError> {
        let text = text.into();
        if text.contains(['-', '_']) {
            Self::url_safe(text)
        } else {
            Self::standard(text)
        }
    }

    /// The text in the standard alphabet, re-padded to a quartet boundary.
    #[must_use]
    pub fn to_standard(&self) -> String {
        match self {
            Self::Standard(text) => text.clone(),
            Self::UrlSafe(text) => {
                // Append three '=' then cut back to len + len % 4. This is
                // the canonical round-trip padding repair and must keep
                // its exact truncation behavior.
                let mut padded = format!("{text}===");
                padded.truncate(text.len() + text.len() % 4);
                padded.replace('-', "+").replace('_', "/")
            }
        }
    }

    /// The text in the URL-safe alphabet with padding stripped.
    #[must_use]
    pub fn to_url_safe(&self) -> String {
        match self {
            Self::Standard(text) => text
                .replace('+', "-")
                .replace('/', "_")
                .trim_end_matches('=')
                .to_string(),
            Self::UrlSafe(text) => text.clone(),
        }
    }

    /// Decode to raw bytes via the standard-alphabet form.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        codec::decode_to_bytes(&self.to_standard())
    }

    /// The text exactly as provided at construction.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard(text) | Self::UrlSafe(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rejects_url_safe_alphabet() {
        assert!(matches!(
            EncodedString::standard("abc_def"),
            Err(CredentialError::Format(_))
        ));
        assert!(matches!(
            EncodedString::standard("abc-def"),
            Err(CredentialError::Format(_))
        ));
    }

    #[test]
    fn url_safe_rejects_standard_alphabet() {
        assert!(matches!(
            EncodedString::url_safe("abc+def"),
            Err(CredentialError::Format(_))
        ));
        assert!(matches!(
            EncodedString::url_safe("abcd=="),
            Err(CredentialError::Format(_))
        ));
    }

    #[test]
    fn detect_classifies_by_alphabet() {
        assert!(matches!(
            EncodedString::detect("abc-def"),
            Ok(EncodedString::UrlSafe(_))
        ));
        assert!(matches!(
            EncodedString::detect("abc+def"),
            Ok(EncodedString::Standard(_))
        ));
        // Ambiguous shared-alphabet text falls through to standard.
        assert!(matches!(
            EncodedString::detect("abcd"),
            Ok(EncodedString::Standard(_))
        ));
    }

    #[test]
    fn url_safe_to_standard_restores_padding_and_alphabet() {
        let encoded = EncodedString::url_safe("ab-_").unwrap();
        assert_eq!(encoded.to_standard(), "ab+/");

        let encoded = EncodedString::url_safe("ab-_cd").unwrap();
        assert_eq!(encoded.to_standard(), "ab+/cd==");

        // A length % 4 == 3 tail keeps all three pads; the permissive
        // decoder discards the excess, so the round trip is unaffected.
        let encoded = EncodedString::url_safe("ab-_cdE").unwrap();
        assert_eq!(encoded.to_standard(), "ab+/cdE===");
    }

    #[test]
    fn standard_to_url_safe_substitutes_and_strips() {
        let encoded = EncodedString::standard("ab+/cd==").unwrap();
        assert_eq!(encoded.to_url_safe(), "ab-_cd");
    }

    #[test]
    fn round_trip_modulo_padding() {
        let text = "ab+/cdE=";
        let encoded = EncodedString::standard(text).unwrap();
        let back = EncodedString::url_safe(encoded.to_url_safe())
            .unwrap()
            .to_standard();
        assert_eq!(back, text);
    }

    #[test]
    fn to_bytes_decodes_either_variant_identically() {
        let standard = EncodedString::standard("aGVsbG8=").unwrap();
        let url_safe = EncodedString::url_safe("aGVsbG8").unwrap();
        assert_eq!(standard.to_bytes(), b"hello".to_vec());
        assert_eq!(url_safe.to_bytes(), b"hello".to_vec());
    }
}
