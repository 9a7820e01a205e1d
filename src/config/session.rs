use serde::Deserialize;
use std::num::NonZeroU64;
use std::time::Duration;
use validator::{Validate, ValidationError};

use crate::util::{MaybeGenerated, Sensitive};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Session {
  /// Secret key used to sign session tokens.
  ///
  /// If it is not set, a random one is generated at startup and every
  /// session is lost when the server restarts.
  ///
  /// **Environment variables**:
  /// - `COMMUNION_SESSION_SECRET` or `SESSION_SECRET`
  #[serde(default = "Session::generate_secret")]
  #[validate(custom(function = "validate_secret"))]
  pub secret: MaybeGenerated<Sensitive<String>>,
  /// How long a session stays valid after login, in seconds.
  ///
  /// **Environment variables**:
  /// - `COMMUNION_SESSION_TTL_SECS`
  #[serde(default = "Session::default_ttl_secs")]
  pub ttl_secs: NonZeroU64,
}

impl Session {
  pub const SECRET_MIN_LEN: usize = 12;
  const DEFAULT_TTL_SECS: u64 = 60 * 60 * 24;

  fn generate_secret() -> MaybeGenerated<Sensitive<String>> {
    MaybeGenerated::Generated(Sensitive::new(communion_crypto::salt::generate_token()))
  }

  const fn default_ttl_secs() -> NonZeroU64 {
    match NonZeroU64::new(Self::DEFAULT_TTL_SECS) {
      Some(n) => n,
      None => panic!("DEFAULT_TTL_SECS is accidentally set to 0"),
    }
  }

  #[must_use]
  pub const fn ttl(&self) -> Duration {
    Duration::from_secs(self.ttl_secs.get())
  }
}

impl Default for Session {
  fn default() -> Self {
    Self {
      secret: Self::generate_secret(),
      ttl_secs: Self::default_ttl_secs(),
    }
  }
}

fn validate_secret(secret: &MaybeGenerated<Sensitive<String>>) -> Result<(), ValidationError> {
  if secret.len() < Session::SECRET_MIN_LEN {
    Err(crate::types::validation::error(
      "length",
      "Session secret must be at least 12 characters long",
    ))
  } else {
    Ok(())
  }
}
