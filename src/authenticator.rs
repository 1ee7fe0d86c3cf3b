//! Authenticator-data byte layout
//!
//! The buffer embedded in an attestation object has the layout:
//! - 32 bytes: RP ID hash
//! - 1 byte: flags
//! - 4 bytes: signature counter
//! - 16 bytes: AAGUID
//! - 2 bytes: credential ID length (big-endian)
//! - L bytes: credential ID
//! - remainder: COSE public key (CBOR)

use ciborium::de::from_reader;
use ciborium::value::Value;

use crate::errors::CredentialError;

/// Offset of the big-endian credential ID length field
const ID_LENGTH_OFFSET: usize = 53;
/// Offset of the credential ID itself
const ID_OFFSET: usize = 55;

/// Structured view over an authenticator-data byte buffer
#[derive(Debug, Clone)]
pub struct AuthenticatorData {
    bytes: Vec<u8>,
    credential_id_length: usize,
}

impl AuthenticatorData {
    /// Take ownership of an authenticator-data buffer and validate its
    /// length fields.
    ///
    /// # Errors
    /// Returns [`CredentialError::Decode`] if the buffer is shorter than
    /// the 55-byte fixed header or the declared credential ID length runs
    /// past the end of the buffer.
    pub fn new(bytes: Vec<u8>) -> Result<Self, CredentialError> {
        if bytes.len() < ID_OFFSET {
            return Err(CredentialError::Decode(
                "truncated authenticator data".to_string(),
            ));
        }

        let credential_id_length = usize::from(u16::from_be_bytes([
            bytes[ID_LENGTH_OFFSET],
            bytes[ID_LENGTH_OFFSET + 1],
        ]));
        if ID_OFFSET + credential_id_length > bytes.len() {
            return Err(CredentialError::Decode(
                "credential id length exceeds buffer".to_string(),
            ));
        }

        Ok(Self {
            bytes,
            credential_id_length,
        })
    }

    /// SHA-256 hash of the relying party ID
    #[must_use]
    pub fn rp_id_hash(&self) -> &[u8] {
        &self.bytes[..32]
    }

    /// Authenticator flags byte
    #[must_use]
    pub fn flags(&self) -> u8 {
        self.bytes[32]
    }

    /// Whether the attested-credential-data flag (bit 6) is set
    #[must_use]
    pub fn has_attested_credential_data(&self) -> bool {
        self.flags() & 0x40 != 0
    }

    /// Signature counter
    #[must_use]
    pub fn sign_count(&self) -> u32 {
        u32::from_be_bytes([self.bytes[33], self.bytes[34], self.bytes[35], self.bytes[36]])
    }

    /// Authenticator model identifier
    #[must_use]
    pub fn aaguid(&self) -> &[u8] {
        &self.bytes[37..ID_LENGTH_OFFSET]
    }

    /// Declared length of the credential ID in bytes
    #[must_use]
    pub fn credential_id_length(&self) -> usize {
        self.credential_id_length
    }

    /// The variable-length credential identifier
    #[must_use]
    pub fn credential_id(&self) -> &[u8] {
        &self.bytes[ID_OFFSET..ID_OFFSET + self.credential_id_length]
    }

    /// Decode the trailing COSE public key as a CBOR value.
    ///
    /// # Errors
    /// Returns [`CredentialError::Decode`] if the trailing bytes are not
    /// valid CBOR.
    pub fn public_key(&self) -> Result<Value, CredentialError> {
        let key_bytes = &self.bytes[ID_OFFSET + self.credential_id_length..];
        from_reader(key_bytes)
            .map_err(|_| CredentialError::Decode("invalid public key".to_string()))
    }

    /// The underlying buffer
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ciborium::ser::into_writer;

    fn buffer_with(credential_id: &[u8], trailing: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0u8; ID_LENGTH_OFFSET];
        bytes[32] = 0x41; // UP + AT
        let id_len = u16::try_from(credential_id.len()).unwrap();
        bytes.extend_from_slice(&id_len.to_be_bytes());
        bytes.extend_from_slice(credential_id);
        bytes.extend_from_slice(trailing);
        bytes
    }

    #[test]
    fn extracts_credential_id_by_length_prefix() {
        let mut key_bytes = Vec::new();
        into_writer(
            &Value::Map(vec![(Value::Integer(1.into()), Value::Integer(2.into()))]),
            &mut key_bytes,
        )
        .unwrap();

        let auth_data =
            AuthenticatorData::new(buffer_with(&[0xaa, 0xbb, 0xcc, 0xdd], &key_bytes)).unwrap();
        assert_eq!(auth_data.credential_id_length(), 4);
        assert_eq!(auth_data.credential_id(), &[0xaa, 0xbb, 0xcc, 0xdd]);

        let key = auth_data.public_key().unwrap();
        assert!(key.as_map().is_some());
    }

    #[test]
    fn exposes_fixed_offset_fields() {
        let mut bytes = buffer_with(b"id", &[]);
        bytes[0] = 0x11;
        bytes[33..37].copy_from_slice(&42u32.to_be_bytes());
        bytes[37] = 0x99;

        let auth_data = AuthenticatorData::new(bytes).unwrap();
        assert_eq!(auth_data.rp_id_hash()[0], 0x11);
        assert!(auth_data.has_attested_credential_data());
        assert_eq!(auth_data.sign_count(), 42);
        assert_eq!(auth_data.aaguid().len(), 16);
        assert_eq!(auth_data.aaguid()[0], 0x99);
    }

    #[test]
    fn rejects_buffer_shorter_than_header() {
        let err = AuthenticatorData::new(vec![0u8; 54]).unwrap_err();
        assert!(matches!(err, CredentialError::Decode(msg)
            if msg == "truncated authenticator data"));
    }

    #[test]
    fn rejects_length_field_past_end_of_buffer() {
        let mut bytes = vec![0u8; 57];
        bytes[ID_LENGTH_OFFSET + 1] = 0x04; // claims 4 bytes, only 2 remain
        let err = AuthenticatorData::new(bytes).unwrap_err();
        assert!(matches!(err, CredentialError::Decode(msg)
            if msg == "credential id length exceeds buffer"));
    }

    #[test]
    fn empty_credential_id_is_valid() {
        let auth_data = AuthenticatorData::new(vec![0u8; ID_OFFSET]).unwrap();
        assert_eq!(auth_data.credential_id(), &[] as &[u8]);
    }
}
