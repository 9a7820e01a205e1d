use actix_web::{web, HttpResponse};

use crate::{
  http::Error,
  types::{
    id::{marker::EventMarker, Id},
    Error as ErrorType,
  },
  App,
};

#[tracing::instrument(skip(app))]
pub async fn get(app: web::Data<App>, path: web::Path<String>) -> Result<HttpResponse, Error> {
  #[derive(Debug, thiserror::Error)]
  #[error("Event not found")]
  struct EventNotFound;

  let id = path
    .parse::<Id<EventMarker>>()
    .map_err(|e| Error::from_context(ErrorType::InvalidRequest("Invalid event ID".into()), e))?;

  match app.store.get_event(id) {
    Some(event) => Ok(HttpResponse::Ok().json(event)),
    None => Err(Error::from_context(ErrorType::NotFound, EventNotFound)),
  }
}
