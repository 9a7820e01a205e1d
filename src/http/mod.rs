use actix_web::{web, App as ActixApp, HttpServer};
use error_stack::{Result, ResultExt};
use tracing_actix_web::TracingLogger;

use crate::types::Error as ErrorType;
use crate::App;

#[cfg(test)]
macro_rules! test_service {
  ($app:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($app))
        .configure(crate::http::configure),
    )
    .await
  };
}

pub mod actor;
pub mod controllers;
pub mod error;

pub use actor::Actor;
pub use error::Error;

#[derive(Debug, thiserror::Error)]
#[error("Failed to run HTTP server")]
pub struct ServeError;

/// Serves the HTTP API until the server is stopped.
pub async fn serve(app: App) -> Result<(), ServeError> {
  let address = (app.config.ip, app.config.port);
  let workers = app.config.workers;
  let data = web::Data::new(app);

  let server = HttpServer::new(move || {
    ActixApp::new()
      .app_data(data.clone())
      .wrap(TracingLogger::default())
      .configure(configure)
  })
  .workers(workers)
  .bind(address)
  .change_context(ServeError)
  .attach_printable_lazy(|| format!("could not bind to {}:{}", address.0, address.1))?;

  tracing::info!("Listening on http://{}:{}", address.0, address.1);
  server.run().await.change_context(ServeError)
}

/// Registers every route under `/api` along with the extractor
/// settings that turn malformed requests into API errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, _| malformed(err.to_string())))
    .app_data(web::QueryConfig::default().error_handler(|err, _| malformed(err.to_string())))
    .app_data(web::PathConfig::default().error_handler(|err, _| malformed(err.to_string())))
    .service(web::scope("/api").configure(controllers::configure));
}

fn malformed(reason: String) -> actix_web::Error {
  #[derive(Debug, thiserror::Error)]
  #[error("Request could not be parsed")]
  struct MalformedRequest;

  Error::from_context(ErrorType::InvalidRequest(reason), MalformedRequest).into()
}
