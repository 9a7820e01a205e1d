use actix_web::{web, HttpResponse};

use crate::{
  http::{Actor, Error},
  types::form::users::LoggedOut,
  App,
};

/// Ends the session of the bearer token, if any. Anonymous requests
/// succeed as well.
#[tracing::instrument(skip(app))]
pub async fn logout(app: web::Data<App>, actor: Actor) -> Result<HttpResponse, Error> {
  if let Actor::User { user, session } = actor {
    app.sessions.revoke(session.as_str());
    tracing::debug!(user.id = %user.id, "logged out");
  }

  Ok(HttpResponse::Ok().json(LoggedOut {
    message: "Logged out successfully".into(),
  }))
}
