use actix_web::{
  web::{self, Json},
  HttpResponse,
};
use validator::Validate;

use crate::{
  auth::{credentials, session},
  http::Error,
  types::form::users::{Authenticated, RegisterUser},
  App,
};

#[tracing::instrument(skip(app))]
pub async fn register(app: web::Data<App>, form: Json<RegisterUser>) -> Result<HttpResponse, Error> {
  form.validate()?;

  let form = form.into_inner();
  let user = credentials::register(&app, &form.username, form.password).await?;
  let token = session::start(&app, &user).map_err(Error::from_internal_report)?;

  Ok(HttpResponse::Created().json(Authenticated {
    id: user.id,
    username: user.username,
    token,
  }))
}
