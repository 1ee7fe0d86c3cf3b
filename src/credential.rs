//! Credential registration result
//!
//! Composes the attestation, client-data, and encoding decoders into one
//! view over a completed registration ceremony.

use crate::attestation::Attestation;
use crate::client_data::ClientData;
use crate::encoding::EncodedString;
use crate::errors::CredentialError;

/// Raw registration result as handed back by the client
#[derive(Debug, Clone)]
pub struct RawCredential {
    pub id: String, // Base64URL-encoded credential ID
    pub response: RawCredentialResponse,
}

/// Authenticator response half of a raw registration result
#[derive(Debug, Clone)]
pub struct RawCredentialResponse {
    pub attestation_object: Vec<u8>, // CBOR attestation envelope
    pub client_data_json: Vec<u8>,   // UTF-8 JSON
}

/// Everything decoded from one completed registration ceremony
#[derive(Debug, Clone)]
pub struct CredentialInfo {
    pub id: EncodedString,
    pub attestation: Attestation,
    pub client_data: ClientData,
}

impl CredentialInfo {
    /// Decode a raw registration result.
    ///
    /// # Errors
    /// Forwards the first failure from any constituent decoder: a
    /// [`CredentialError::Format`] from the credential ID alphabet check,
    /// or a [`CredentialError::Decode`] from the attestation or client
    /// data. No partial result is produced.
    pub fn new(raw: &RawCredential) -> Result<Self, CredentialError> {
        let info = Self {
            id: EncodedString::detect(raw.id.as_str())?,
            attestation: Attestation::from_bytes(&raw.response.attestation_object)?,
            client_data: ClientData::from_bytes(&raw.response.client_data_json)?,
        };
        log::debug!(
            "decoded registration of credential with {}-byte id",
            info.attestation.auth_data().credential_id_length()
        );
        Ok(info)
    }
}
