//! Attestation object envelope
//!
//! The attestation object returned on registration is a CBOR map carrying
//! the attestation statement format, the statement itself, and the
//! authenticator-data buffer. Only `authData` is required here; statement
//! verification is out of scope.

use ciborium::de::from_reader;
use ciborium::value::Value;

use crate::authenticator::AuthenticatorData;
use crate::errors::CredentialError;

/// Decoded attestation object from a registration ceremony
#[derive(Debug, Clone)]
pub struct Attestation {
    format: Option<String>,
    auth_data: AuthenticatorData,
}

impl Attestation {
    /// Decode the CBOR envelope and the authenticator data nested in it.
    ///
    /// # Errors
    /// Returns [`CredentialError::Decode`] if the envelope is not a CBOR
    /// map, the `authData` entry is missing or not a byte string, or the
    /// authenticator-data buffer itself is malformed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CredentialError> {
        let envelope: Value = from_reader(bytes)
            .map_err(|_| CredentialError::Decode("invalid attestation object".to_string()))?;
        let Some(entries) = envelope.as_map() else {
            return Err(CredentialError::Decode(
                "invalid attestation object".to_string(),
            ));
        };

        let auth_data_bytes = entries
            .iter()
            .find(|(key, _)| key.as_text() == Some("authData"))
            .and_then(|(_, value)| value.as_bytes())
            .ok_or_else(|| CredentialError::Decode("invalid attestation object".to_string()))?;

        let format = entries
            .iter()
            .find(|(key, _)| key.as_text() == Some("fmt"))
            .and_then(|(_, value)| value.as_text())
            .map(ToString::to_string);
        log::debug!(
            "decoded attestation object (fmt: {})",
            format.as_deref().unwrap_or("absent")
        );

        Ok(Self {
            format,
            auth_data: AuthenticatorData::new(auth_data_bytes.clone())?,
        })
    }

    /// Attestation statement format (`"none"`, `"packed"`, ...) when the
    /// envelope carries one
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// The decoded authenticator data
    #[must_use]
    pub fn auth_data(&self) -> &AuthenticatorData {
        &self.auth_data
    }

    /// Decode the COSE public key trailing the credential ID.
    ///
    /// # Errors
    /// Returns [`CredentialError::Decode`] if the key bytes are not valid
    /// CBOR.
    pub fn public_key(&self) -> Result<Value, CredentialError> {
        self.auth_data.public_key()
    }
}
