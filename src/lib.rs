#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Decoders for the binary artifacts of a `WebAuthn` registration ceremony.
//!
//! A registration ceremony hands back two opaque blobs: a CBOR attestation
//! object and a JSON client-data buffer. This crate navigates their byte
//! layouts - locating the credential ID inside the authenticator data and
//! the COSE public key after it - and provides the base64 / base64url
//! string handling those blobs travel in. Signature verification and
//! ceremony orchestration are out of scope.

/// Version of the attested library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod attestation;
pub mod authenticator;
pub mod challenge;
pub mod client_data;
pub mod codec;
pub mod credential;
pub mod encoding;
pub mod errors;

/// Re-export commonly used items
pub use attestation::Attestation;
pub use authenticator::AuthenticatorData;
pub use challenge::{EntropySource, RandomChallengeGenerator, SystemEntropy};
pub use client_data::ClientData;
pub use codec::{decode_to_bytes, encode_to_text};
pub use credential::{CredentialInfo, RawCredential, RawCredentialResponse};
pub use encoding::EncodedString;
pub use errors::CredentialError;
