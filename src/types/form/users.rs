use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::id::{marker::UserMarker, Id};
use crate::types::validation::{error, validate_password, validate_username};
use crate::util::Sensitive;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct RegisterUser {
  #[validate(custom(function = "validate_username"))]
  pub username: String,
  #[validate(custom(function = "validate_password"))]
  pub password: Sensitive<String>,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct LoginUser {
  #[validate(length(min = 1, message = "Username is required"))]
  pub username: String,
  #[validate(custom(function = "validate_login_password"))]
  pub password: Sensitive<String>,
}

fn validate_login_password(password: &Sensitive<String>) -> Result<(), validator::ValidationError> {
  if password.is_empty() {
    Err(error("required", "Password is required"))
  } else {
    Ok(())
  }
}

/// Returned after a successful registration or login.
#[derive(Debug, Deserialize, Serialize)]
pub struct Authenticated {
  pub id: Id<UserMarker>,
  pub username: String,
  pub token: Sensitive<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CurrentUser {
  pub id: Id<UserMarker>,
  pub username: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoggedOut {
  pub message: String,
}
