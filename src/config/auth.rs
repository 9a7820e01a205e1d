use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Auth {
  /// Minimum time a login attempt takes, in milliseconds. Every attempt
  /// is padded to this duration whether or not the username exists.
  ///
  /// **Environment variables**:
  /// - `COMMUNION_AUTH_LOGIN_PADDING_MS`
  #[serde(default = "Auth::default_login_padding_ms")]
  pub login_padding_ms: u64,
}

impl Auth {
  const DEFAULT_LOGIN_PADDING_MS: u64 = 500;

  const fn default_login_padding_ms() -> u64 {
    Self::DEFAULT_LOGIN_PADDING_MS
  }

  #[must_use]
  pub const fn login_padding(&self) -> Duration {
    Duration::from_millis(self.login_padding_ms)
  }
}

impl Default for Auth {
  fn default() -> Self {
    Self {
      login_padding_ms: Self::DEFAULT_LOGIN_PADDING_MS,
    }
  }
}
