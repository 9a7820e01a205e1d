use crate::default_rng;
use rand_chacha::rand_core::RngCore;

/// Length of a password salt in bytes.
pub const SALT_LEN: usize = 16;

/// Length of a session token in bytes, before hex encoding.
pub const TOKEN_LEN: usize = 32;

/// Generates a random unique salt.
#[must_use]
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut buffer = [0u8; SALT_LEN];
    default_rng().fill_bytes(&mut buffer);
    buffer
}

/// Generates a random salt encoded as lowercase hex.
#[must_use]
pub fn generate_salt_hex() -> String {
    hex::encode(generate_salt())
}

/// Generates an opaque, unguessable token encoded as lowercase hex.
#[must_use]
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LEN];
    default_rng().fill_bytes(&mut buffer);
    hex::encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salts_are_hex_encoded() {
        let salt = generate_salt_hex();
        assert_eq!(salt.len(), SALT_LEN * 2);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn salts_are_never_reused() {
        assert_ne!(generate_salt(), generate_salt());
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn tokens_have_expected_length() {
        assert_eq!(generate_token().len(), TOKEN_LEN * 2);
    }
}
