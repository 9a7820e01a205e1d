use actix_web::web;

pub mod events;
pub mod users;

pub fn configure(cfg: &mut web::ServiceConfig) {
  cfg
    .service(
      web::resource("/events")
        .route(web::get().to(events::list))
        .route(web::post().to(events::create)),
    )
    .route("/events/{id}", web::get().to(events::get))
    .route("/event-categories", web::get().to(events::categories))
    .route("/register", web::post().to(users::register))
    .route("/login", web::post().to(users::login))
    .route("/logout", web::post().to(users::logout))
    .route("/me", web::get().to(users::me));
}
