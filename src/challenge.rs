//! Registration challenge generation
//!
//! The entropy source is an injected capability so tests can substitute a
//! deterministic one.

use ring::rand::SecureRandom;

use crate::codec;
use crate::encoding::EncodedString;

/// Byte length of a registration challenge (256 bits)
pub const CHALLENGE_LEN: usize = 32;

/// Source of uniformly random bytes
pub trait EntropySource {
    /// Fill `dest` with random bytes.
    fn fill(&self, dest: &mut [u8]);
}

/// System entropy backed by [`ring::rand::SystemRandom`]
pub struct SystemEntropy {
    rng: ring::rand::SystemRandom,
}

impl SystemEntropy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: ring::rand::SystemRandom::new(),
        }
    }
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for SystemEntropy {
    fn fill(&self, dest: &mut [u8]) {
        self.rng.fill(dest).expect("system entropy source failed");
    }
}

/// Generates the random challenge for one ceremony
pub struct RandomChallengeGenerator<E = SystemEntropy> {
    entropy: E,
}

impl RandomChallengeGenerator<SystemEntropy> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entropy: SystemEntropy::new(),
        }
    }
}

impl Default for RandomChallengeGenerator<SystemEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> RandomChallengeGenerator<E> {
    /// Use a caller-supplied entropy source.
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Produce a fresh 32-byte challenge.
    #[must_use]
    pub fn generate(&self) -> [u8; CHALLENGE_LEN] {
        let mut challenge = [0u8; CHALLENGE_LEN];
        self.entropy.fill(&mut challenge);
        challenge
    }

    /// Produce a fresh challenge in the URL-safe text form clients expect.
    #[must_use]
    pub fn generate_encoded(&self) -> EncodedString {
        // encode_to_text never emits '-' or '_', so the standard tag holds.
        let standard = EncodedString::Standard(codec::encode_to_text(&self.generate()));
        EncodedString::UrlSafe(standard.to_url_safe())
    }
}
