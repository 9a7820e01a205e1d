use actix_web::{http::header, web, FromRequest};
use futures::future::{ready, Ready};

use crate::auth::session;
use crate::schema::User;
use crate::util::Sensitive;
use crate::App;

use super::Error;

/// Who performed the request. A missing, expired or revoked bearer token
/// makes the request anonymous rather than failing it.
#[derive(Debug)]
pub enum Actor {
  Anonymous,
  User {
    user: User,
    session: Sensitive<String>,
  },
}

impl Actor {
  pub fn into_user(self) -> Result<User, Error> {
    #[derive(Debug, thiserror::Error)]
    #[error("Attempt to access user-only route")]
    struct Unauthorized;
    match self {
      Self::User { user, .. } => Ok(user),
      Self::Anonymous => Err(Error::from_context(
        crate::types::Error::Unauthorized,
        Unauthorized,
      )),
    }
  }
}

impl FromRequest for Actor {
  type Error = Error;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(
    req: &actix_web::HttpRequest,
    _payload: &mut actix_web::dev::Payload,
  ) -> Self::Future {
    let token = req
      .headers()
      .get(header::AUTHORIZATION)
      .and_then(|v| v.to_str().ok())
      .and_then(|v| v.strip_prefix("Bearer "));

    let Some(token) = token else {
      return ready(Ok(Actor::Anonymous));
    };

    let Some(app) = req.app_data::<web::Data<App>>() else {
      #[derive(Debug, thiserror::Error)]
      #[error("The web app has no available configuration")]
      struct NoConfig;
      return ready(Err(Error::internal(NoConfig)));
    };

    let actor = match session::resolve(app, token.trim()) {
      Some((claims, user)) => Actor::User {
        user,
        session: claims.sid,
      },
      None => Actor::Anonymous,
    };
    ready(Ok(actor))
  }
}
