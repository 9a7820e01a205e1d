//! Cryptographic primitives used by the Communion server: password
//! credential derivation, random salts and session tokens.
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

pub mod password;
pub mod salt;

/// Useful cryptography-related utilities for [`Future`]s.
///
/// [`Future`]: std::future::Future
pub mod future;

pub use ::hex;

/// Gets the default RNG (random number generator) for the Communion
/// server which is [`ChaCha20Rng`].
#[must_use]
pub fn default_rng() -> ChaCha20Rng {
    ChaCha20Rng::from_entropy()
}
