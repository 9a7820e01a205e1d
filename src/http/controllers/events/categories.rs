use actix_web::{web, HttpResponse};

use crate::{http::Error, App};

#[tracing::instrument(skip(app))]
pub async fn categories(app: web::Data<App>) -> Result<HttpResponse, Error> {
  Ok(HttpResponse::Ok().json(app.store.get_event_categories()))
}
