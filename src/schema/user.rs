use crate::types::id::{marker::UserMarker, Id};

/// A registered account. It is never serialized as is since it carries
/// the credential material of the user.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
  pub id: Id<UserMarker>,
  pub username: String,
  /// `"<derivedHex>.<saltHex>"`, see [`communion_crypto::password`].
  pub password_hash: String,
}

impl std::fmt::Debug for User {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("User")
      .field("id", &self.id)
      .field("username", &self.username)
      .finish_non_exhaustive()
  }
}
