use actix_web::{body::BoxBody, http::StatusCode, HttpResponse};
use serde_json::{json, Value};

use super::Error;
use crate::store::{InvalidEventDate, UsernameTaken};
use crate::types::Error as ErrorType;

impl actix_web::ResponseError for Error {
  fn status_code(&self) -> StatusCode {
    match self.error_type {
      ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
      ErrorType::InvalidCredentials | ErrorType::Unauthorized => StatusCode::UNAUTHORIZED,
      ErrorType::InvalidFormBody(..) | ErrorType::InvalidRequest(..) => StatusCode::BAD_REQUEST,
      ErrorType::NotFound => StatusCode::NOT_FOUND,
      ErrorType::UsernameTaken => StatusCode::CONFLICT,
    }
  }

  fn error_response(&self) -> HttpResponse<BoxBody> {
    if matches!(self.error_type, ErrorType::Internal) {
      tracing::error!(report = ?self.report, trace = %self.trace, "internal server error");
    }

    let mut body = serde_json::to_value(&self.error_type).unwrap_or_else(|_| json!({}));
    if let Value::Object(ref mut map) = body {
      map.insert("message".into(), Value::String(self.error_type.to_string()));
    }
    HttpResponse::build(self.status_code()).json(body)
  }
}

impl From<validator::ValidationErrors> for Error {
  fn from(value: validator::ValidationErrors) -> Self {
    #[derive(Debug, thiserror::Error)]
    #[error("Validation error occurred")]
    struct ValidateError;
    Error::from_context(ErrorType::InvalidFormBody(value), ValidateError)
  }
}

impl From<UsernameTaken> for Error {
  fn from(value: UsernameTaken) -> Self {
    Error::from_context(ErrorType::UsernameTaken, value)
  }
}

impl From<InvalidEventDate> for Error {
  fn from(value: InvalidEventDate) -> Self {
    Error::from_context(ErrorType::InvalidRequest(value.to_string()), value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{body::MessageBody, ResponseError};

  fn body_of(error: &Error) -> Value {
    let bytes = error.error_response().into_body().try_into_bytes().ok();
    bytes
      .and_then(|bytes| serde_json::from_slice(&bytes).ok())
      .unwrap_or(Value::Null)
  }

  #[test]
  fn test_status_codes() {
    let cases = [
      (ErrorType::Internal, StatusCode::INTERNAL_SERVER_ERROR),
      (ErrorType::InvalidCredentials, StatusCode::UNAUTHORIZED),
      (ErrorType::Unauthorized, StatusCode::UNAUTHORIZED),
      (ErrorType::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
      (ErrorType::NotFound, StatusCode::NOT_FOUND),
      (ErrorType::UsernameTaken, StatusCode::CONFLICT),
    ];

    for (error_type, status) in cases {
      assert_eq!(Error::new(error_type).status_code(), status);
    }
  }

  #[test]
  fn test_body_carries_type_and_message() {
    let error = Error::from(UsernameTaken);
    assert_eq!(
      body_of(&error),
      json!({ "type": "username_taken", "message": "Username already exists" })
    );

    let error = Error::new(ErrorType::InvalidRequest("Invalid event ID".into()));
    assert_eq!(
      body_of(&error),
      json!({
        "type": "invalid_request",
        "data": "Invalid event ID",
        "message": "Invalid event ID",
      })
    );
  }

  #[test]
  fn test_validation_errors_are_field_level() {
    let mut errors = validator::ValidationErrors::new();
    errors.add("title", validator::ValidationError::new("required"));

    let body = body_of(&Error::from(errors));
    assert_eq!(body["type"], "invalid_form_body");
    assert!(body["data"]["title"].is_array());
  }
}
