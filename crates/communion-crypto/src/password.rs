//! Password credential material.
//!
//! A credential is stored as `"<derivedHex>.<saltHex>"` where the derived
//! part is a 64-byte scrypt output of the password salted with the salt's
//! hex string, using scrypt with N = 2^14, r = 8 and p = 1.
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::salt::generate_salt_hex;

/// Length of the derived key in bytes.
pub const KEY_LEN: usize = 64;

const SEPARATOR: char = '.';

// N = 2^14, r = 8, p = 1
const LOG_N: u8 = 14;
const BLOCK_SIZE: u32 = 8;
const PARALLELISM: u32 = 1;

#[derive(Debug, Error)]
#[error("Failed to generate password hash")]
pub struct HashPasswordError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyPasswordError {
    #[error("Stored credential is malformed: {0}")]
    Malformed(&'static str),
    #[error("Failed to derive password key")]
    Derive,
}

/// Derives storable credential material from a plaintext password
/// with a freshly generated salt.
pub fn hash(password: impl AsRef<[u8]>) -> Result<String, HashPasswordError> {
    let salt = generate_salt_hex();
    let derived = derive(password.as_ref(), salt.as_bytes()).map_err(|_| HashPasswordError)?;
    Ok(format!("{}{SEPARATOR}{salt}", hex::encode(derived)))
}

/// Verifies a supplied password against stored credential material.
///
/// Wrong passwords and derived keys of the wrong length give `Ok(false)`.
/// A credential without a separator or with a non-hex derived part is
/// reported as [`VerifyPasswordError::Malformed`].
pub fn verify(password: impl AsRef<[u8]>, stored: &str) -> Result<bool, VerifyPasswordError> {
    let mut parts = stored.split(SEPARATOR);
    let (Some(derived_hex), Some(salt_hex)) = (parts.next(), parts.next()) else {
        return Err(VerifyPasswordError::Malformed("missing separator"));
    };

    // The derived key length is not secret, only its contents are.
    if derived_hex.len() != KEY_LEN * 2 {
        return Ok(false);
    }

    let expected = hex::decode(derived_hex)
        .map_err(|_| VerifyPasswordError::Malformed("derived key is not hex encoded"))?;

    let supplied = derive(password.as_ref(), salt_hex.as_bytes())?;
    Ok(bool::from(supplied.as_slice().ct_eq(expected.as_slice())))
}

fn derive(password: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN], VerifyPasswordError> {
    let params = scrypt::Params::new(LOG_N, BLOCK_SIZE, PARALLELISM, KEY_LEN)
        .map_err(|_| VerifyPasswordError::Derive)?;

    let mut buffer = [0u8; KEY_LEN];
    scrypt::scrypt(password, salt, &params, &mut buffer).map_err(|_| VerifyPasswordError::Derive)?;
    Ok(buffer)
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_uses_fresh_salts() {
        let first = hash("secret").unwrap();
        let second = hash("secret").unwrap();
        assert_ne!(first, second);

        assert!(verify("secret", &first).unwrap());
        assert!(verify("secret", &second).unwrap());
    }

    #[test]
    fn credential_layout() {
        let credential = hash("secret").unwrap();
        let (derived, salt) = credential.split_once('.').unwrap();
        assert_eq!(derived.len(), KEY_LEN * 2);
        assert_eq!(salt.len(), crate::salt::SALT_LEN * 2);
    }

    #[test]
    fn rejects_wrong_password() {
        let credential = hash("secret").unwrap();
        assert!(!verify("wrong", &credential).unwrap());
        assert!(!verify("", &credential).unwrap());
    }

    #[test]
    fn wrong_length_is_not_an_error() {
        let credential = hash("secret").unwrap();
        let (derived, salt) = credential.split_once('.').unwrap();

        let truncated = format!("{}.{salt}", &derived[..KEY_LEN]);
        assert_eq!(verify("secret", &truncated), Ok(false));

        let odd = format!("{}.{salt}", &derived[..KEY_LEN * 2 - 1]);
        assert_eq!(verify("secret", &odd), Ok(false));

        let longer = format!("{derived}a.{salt}");
        assert_eq!(verify("secret", &longer), Ok(false));

        let empty = format!(".{salt}");
        assert_eq!(verify("secret", &empty), Ok(false));
    }

    #[test]
    fn malformed_credentials() {
        assert!(matches!(
            verify("secret", "deadbeef"),
            Err(VerifyPasswordError::Malformed(..))
        ));
        let not_hex = format!("{}.abcdef", "z".repeat(KEY_LEN * 2));
        assert!(matches!(
            verify("secret", &not_hex),
            Err(VerifyPasswordError::Malformed(..))
        ));
    }

    #[test]
    fn verifies_credential_with_fixed_salt() {
        let salt = "00112233445566778899aabbccddeeff";
        let derived = derive(b"secret", salt.as_bytes()).unwrap();
        let credential = format!("{}.{salt}", hex::encode(derived));
        assert!(verify("secret", &credential).unwrap());
        assert!(!verify("Secret", &credential).unwrap());
    }
}
