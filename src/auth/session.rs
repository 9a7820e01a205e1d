use chrono::{DateTime, Utc};
use error_stack::{Result, ResultExt};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;

use crate::schema::User;
use crate::types::id::{marker::UserMarker, Id};
use crate::types::Timestamp;
use crate::util::Sensitive;
use crate::App;

#[derive(Debug, Clone, Copy)]
struct Session {
  user_id: Id<UserMarker>,
  expires_at: Timestamp,
}

/// Server-side record of every signed-in session. A token is only honored
/// while its session is still registered here, which is what makes logout
/// take effect before the token itself expires.
#[derive(Debug, Default)]
pub struct SessionRegistry {
  sessions: Mutex<HashMap<String, Session>>,
}

#[derive(Debug)]
pub struct IssuedSession {
  pub sid: Sensitive<String>,
  pub issued_at: Timestamp,
  pub expires_at: Timestamp,
}

impl SessionRegistry {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a new session for the user. Expired sessions are
  /// dropped along the way.
  #[tracing::instrument(skip(self))]
  pub fn issue(&self, user_id: Id<UserMarker>, ttl: Duration) -> IssuedSession {
    let issued_at = Timestamp::now();
    let expires_at = chrono::Duration::from_std(ttl)
      .ok()
      .and_then(|ttl| issued_at.checked_add_signed(ttl))
      .unwrap_or(DateTime::<Utc>::MAX_UTC)
      .into();

    let sid = communion_crypto::salt::generate_token();
    let mut sessions = self.lock();
    sessions.retain(|_, session| session.expires_at > issued_at);
    sessions.insert(sid.clone(), Session { user_id, expires_at });
    tracing::debug!(active = sessions.len(), "issued a session");

    IssuedSession {
      sid: Sensitive::new(sid),
      issued_at,
      expires_at,
    }
  }

  /// Returns the user of a live session.
  #[tracing::instrument(skip_all)]
  pub fn resolve(&self, sid: &str) -> Option<Id<UserMarker>> {
    let sessions = self.lock();
    let session = sessions.get(sid)?;
    (session.expires_at > Timestamp::now()).then_some(session.user_id)
  }

  /// Ends a session. Returns whether the session was registered.
  #[tracing::instrument(skip_all)]
  pub fn revoke(&self, sid: &str) -> bool {
    self.lock().remove(sid).is_some()
  }

  fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
    self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

#[derive(Debug, Error)]
#[error("Failed to encode session token")]
pub struct EncodeTokenError;

/// Claims of the bearer token handed to a signed-in client.
#[derive(Debug, Deserialize, Serialize)]
pub struct SessionClaims {
  pub sid: Sensitive<String>,
  pub uid: Id<UserMarker>,
  pub iat: i64,
  pub exp: i64,
}

impl SessionClaims {
  const ALGORITHM: Algorithm = Algorithm::HS512;

  #[must_use]
  pub fn new(user_id: Id<UserMarker>, session: IssuedSession) -> Self {
    Self {
      sid: session.sid,
      uid: user_id,
      iat: session.issued_at.timestamp(),
      exp: session.expires_at.timestamp(),
    }
  }

  pub fn encode(&self, secret: &[u8]) -> Result<String, EncodeTokenError> {
    let header = Header::new(Self::ALGORITHM);
    let key = EncodingKey::from_secret(secret);
    jsonwebtoken::encode(&header, self, &key).change_context(EncodeTokenError)
  }

  /// Decodes and checks a token. Tokens with a bad signature or that are
  /// past their expiry give `None`.
  #[must_use]
  pub fn decode(token: &str, secret: &[u8]) -> Option<Self> {
    let key = DecodingKey::from_secret(secret);
    let validation = Validation::new(Self::ALGORITHM);
    match jsonwebtoken::decode::<Self>(token, &key, &validation) {
      Ok(data) => Some(data.claims),
      Err(error) => {
        tracing::debug!(%error, "rejected session token");
        None
      }
    }
  }
}

/// Starts a session for the user and returns its bearer token.
#[tracing::instrument(skip_all, fields(user.id = %user.id))]
pub fn start(app: &App, user: &User) -> Result<Sensitive<String>, EncodeTokenError> {
  let session = app.sessions.issue(user.id, app.config.session.ttl());
  let claims = SessionClaims::new(user.id, session);
  claims
    .encode(app.config.session.secret.as_str().as_bytes())
    .map(Sensitive::new)
}

/// Resolves a bearer token into the claims of a live session and the user
/// it belongs to.
#[tracing::instrument(skip_all)]
pub fn resolve(app: &App, token: &str) -> Option<(SessionClaims, User)> {
  let claims = SessionClaims::decode(token, app.config.session.secret.as_str().as_bytes())?;
  let user_id = app.sessions.resolve(claims.sid.as_str())?;
  if user_id != claims.uid {
    return None;
  }

  let user = app.store.get_user(user_id)?;
  Some((claims, user))
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_issue_and_resolve() {
    let registry = SessionRegistry::new();
    let session = registry.issue(Id::new(1), Duration::from_secs(60));
    assert_eq!(session.sid.len(), 64);
    assert!(session.expires_at > session.issued_at);
    assert_eq!(registry.resolve(session.sid.as_str()), Some(Id::new(1)));
    assert_eq!(registry.resolve("unknown"), None);
  }

  #[test]
  fn test_revoke() {
    let registry = SessionRegistry::new();
    let session = registry.issue(Id::new(1), Duration::from_secs(60));
    assert!(registry.revoke(session.sid.as_str()));
    assert!(!registry.revoke(session.sid.as_str()));
    assert_eq!(registry.resolve(session.sid.as_str()), None);
  }

  #[test]
  fn test_expired_sessions_are_pruned() {
    let registry = SessionRegistry::new();
    let expired = registry.issue(Id::new(1), Duration::ZERO);
    assert_eq!(registry.resolve(expired.sid.as_str()), None);

    registry.issue(Id::new(2), Duration::from_secs(60));
    assert_eq!(registry.lock().len(), 1);
  }

  #[test]
  fn test_claims_roundtrip() {
    let registry = SessionRegistry::new();
    let session = registry.issue(Id::new(7), Duration::from_secs(60));
    let sid = session.sid.clone();

    let token = SessionClaims::new(Id::new(7), session)
      .encode(b"a very long secret")
      .unwrap();

    let claims = SessionClaims::decode(&token, b"a very long secret").unwrap();
    assert_eq!(claims.uid, Id::new(7));
    assert_eq!(claims.sid, sid);

    assert!(SessionClaims::decode(&token, b"another secret!!").is_none());
    assert!(SessionClaims::decode("garbage", b"a very long secret").is_none());
  }

  #[test]
  fn test_expired_token_is_rejected() {
    let claims = SessionClaims {
      sid: Sensitive::new("sid".into()),
      uid: Id::new(1),
      iat: 0,
      exp: 1,
    };
    let token = claims.encode(b"a very long secret").unwrap();
    assert!(SessionClaims::decode(&token, b"a very long secret").is_none());
  }

  #[test]
  fn test_start_and_resolve_through_app() {
    let app = App::for_tests();
    let user = app.store.create_user("alice", "a.b".into()).unwrap();

    let token = start(&app, &user).unwrap();
    let (claims, resolved) = resolve(&app, token.as_str()).unwrap();
    assert_eq!(resolved, user);

    app.sessions.revoke(claims.sid.as_str());
    assert!(resolve(&app, token.as_str()).is_none());
  }
}
