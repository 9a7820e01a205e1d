use actix_web::{
  web::{self, Json},
  HttpResponse,
};
use validator::Validate;

use crate::{http::Error, types::form::events::CreateEvent, App};

#[tracing::instrument(skip(app))]
pub async fn create(app: web::Data<App>, form: Json<CreateEvent>) -> Result<HttpResponse, Error> {
  form.validate()?;

  let event = app.store.create_event(form.into_inner().into())?;
  Ok(HttpResponse::Created().json(event))
}
