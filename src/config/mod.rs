use thiserror::Error;

mod auth;
mod logging;
mod server;
mod session;

pub use auth::Auth;
pub use logging::{InvalidLoggingStyle, Logging, LoggingStyle};
pub use server::Server;
pub use session::Session;

#[derive(Debug, Error)]
#[error("Failed to load configuration")]
pub struct ParseError;
