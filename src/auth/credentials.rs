use communion_crypto::future::SubtleTimingFutureExt;
use communion_crypto::password;
use tokio::task::spawn_blocking;

use crate::http::Error;
use crate::schema::User;
use crate::types::Error as ErrorType;
use crate::util::Sensitive;
use crate::App;

#[derive(Debug, thiserror::Error)]
#[error("Username or password did not match")]
struct CredentialsMismatch;

/// Creates an account. Key derivation runs on the blocking pool and the
/// username check happens atomically with the insert.
#[tracing::instrument(skip(app, password), name = "auth.register")]
pub async fn register(app: &App, username: &str, password: Sensitive<String>) -> Result<User, Error> {
  let password_hash = spawn_blocking(move || password::hash(password.as_str()))
    .await
    .map_err(Error::internal)?
    .map_err(Error::internal)?;

  let user = app.store.create_user(username, password_hash)?;
  tracing::info!(user.id = %user.id, "registered a new user");

  Ok(user)
}

/// Checks a username and password pair.
///
/// Every attempt takes at least `auth.login_padding_ms`, and unknown
/// usernames fail exactly like wrong passwords so neither the response
/// nor its timing reveals which accounts exist.
#[tracing::instrument(skip(app, password), name = "auth.authenticate")]
pub async fn authenticate(
  app: &App,
  username: &str,
  password: Sensitive<String>,
) -> Result<User, Error> {
  async move {
    let Some(user) = app.store.get_user_by_username(username) else {
      return Err(Error::from_context(ErrorType::InvalidCredentials, CredentialsMismatch));
    };

    let stored = user.password_hash.clone();
    let verified = spawn_blocking(move || password::verify(password.as_str(), &stored))
      .await
      .map_err(Error::internal)?;

    match verified {
      Ok(true) => Ok(user),
      Ok(false) => Err(Error::from_context(ErrorType::InvalidCredentials, CredentialsMismatch)),
      Err(error) => {
        Err(Error::internal(error).attach_printable(format!("stored credential of user {}", user.id)))
      }
    }
  }
  .subtle_timing(app.config.auth.login_padding())
  .await
}
