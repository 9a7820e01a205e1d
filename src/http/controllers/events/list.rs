use actix_web::{web, HttpResponse};

use crate::{http::Error, types::form::events::EventFilter, App};

#[tracing::instrument(skip(app))]
pub async fn list(app: web::Data<App>, filter: web::Query<EventFilter>) -> Result<HttpResponse, Error> {
  let events = app.store.get_events(&filter);
  Ok(HttpResponse::Ok().json(events))
}
