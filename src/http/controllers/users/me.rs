use actix_web::HttpResponse;

use crate::{
  http::{Actor, Error},
  types::form::users::CurrentUser,
};

#[tracing::instrument]
pub async fn me(actor: Actor) -> Result<HttpResponse, Error> {
  let user = actor.into_user()?;
  Ok(HttpResponse::Ok().json(CurrentUser {
    id: user.id,
    username: user.username,
  }))
}
