//! Client data JSON
//!
//! The `clientDataJSON` buffer is the UTF-8 JSON record of ceremony
//! parameters the authenticator signed over.

use serde::Deserialize;

use crate::errors::CredentialError;

/// Decoded client data from a registration ceremony
#[derive(Debug, Clone, Deserialize)]
pub struct ClientData {
    challenge: String, // Base64URL-encoded challenge echoed by the client
    origin: String,    // Origin the ceremony ran on
    #[serde(rename = "type")]
    auth_type: String, // "webauthn.create" or "webauthn.get"
}

impl ClientData {
    /// Parse a UTF-8 JSON buffer into its challenge, origin, and ceremony
    /// type fields.
    ///
    /// # Errors
    /// Returns [`CredentialError::Decode`] on invalid UTF-8, invalid JSON,
    /// or a missing field.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CredentialError> {
        serde_json::from_slice(bytes)
            .map_err(|_| CredentialError::Decode("invalid client data".to_string()))
    }

    /// Base64URL-encoded challenge
    #[must_use]
    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    /// Origin the ceremony ran on
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Ceremony type
    #[must_use]
    pub fn auth_type(&self) -> &str {
        &self.auth_type
    }
}
