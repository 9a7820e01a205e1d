use serde::Serialize;
use std::fmt::Display;

/// Public kind of a failed request. It decides the HTTP status code and is
/// serialized into the response body.
#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Error {
  Internal,
  InvalidCredentials,
  InvalidFormBody(validator::ValidationErrors),
  InvalidRequest(String),
  NotFound,
  Unauthorized,
  UsernameTaken,
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Error::Internal => f.write_str("Failed to perform request"),
      Error::InvalidCredentials => f.write_str("Invalid username or password"),
      Error::InvalidFormBody(..) => f.write_str("User performed request with invalid body"),
      Error::InvalidRequest(reason) => f.write_str(reason),
      Error::NotFound => f.write_str("Resource not found"),
      Error::Unauthorized => f.write_str("Not authenticated"),
      Error::UsernameTaken => f.write_str("Username already exists"),
    }
  }
}
