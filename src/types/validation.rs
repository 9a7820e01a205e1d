use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

use crate::util::Sensitive;

pub const USERNAME_MAX: usize = 30;
pub const PASSWORD_MIN: usize = 1;
pub const PASSWORD_MAX: usize = 128;

static USERNAME_REGEX: Lazy<Option<Regex>> =
  Lazy::new(|| Regex::new(r"^(?:[A-Za-z0-9]|[A-Za-z0-9_][A-Za-z0-9\.\-_]*[A-Za-z0-9])$").ok());

#[must_use]
pub fn is_valid_username(name: &str) -> bool {
  name.len() <= USERNAME_MAX
    && USERNAME_REGEX
      .as_ref()
      .is_some_and(|regex| regex.is_match(name))
}

/// Only `http` and `https` URLs are accepted as event images.
#[must_use]
pub fn is_valid_image_url(value: &str) -> bool {
  url::Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

pub(crate) fn error(code: &'static str, message: &'static str) -> ValidationError {
  ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn validate_username(name: &str) -> Result<(), ValidationError> {
  if is_valid_username(name) {
    Ok(())
  } else {
    Err(error("username", "Invalid username"))
  }
}

pub fn validate_password(password: &Sensitive<String>) -> Result<(), ValidationError> {
  let value = password.as_str();
  if value.trim().len() != value.len() {
    Err(error(
      "password",
      "Passwords must not have starting or ending with spaces",
    ))
  } else if value.len() > PASSWORD_MAX {
    Err(error("password", "Passwords must not be too big"))
  } else if value.len() < PASSWORD_MIN {
    Err(error("password", "Passwords must not be empty"))
  } else {
    Ok(())
  }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    Err(error("required", "This field must not be empty"))
  } else {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_is_valid_username() {
    assert!(is_valid_username("alice"));
    assert!(is_valid_username("a"));
    assert!(is_valid_username("mark.robes"));
    assert!(is_valid_username("salmon-ella"));
    assert!(is_valid_username("crossword_puzzle"));
    assert!(is_valid_username("2pac"));
    assert!(is_valid_username("_apple"));

    assert!(!is_valid_username(""));
    assert!(!is_valid_username("trailing_underscore_"));
    assert!(!is_valid_username("pretty ugly"));
    assert!(!is_valid_username(&"a".repeat(USERNAME_MAX + 1)));
  }

  #[test]
  fn test_is_valid_image_url() {
    assert!(is_valid_image_url(
      "https://images.unsplash.com/photo-1576267423445-b2e0074d68a4?w=600&h=300&fit=crop"
    ));
    assert!(is_valid_image_url("http://example.com/a.png"));
    assert!(!is_valid_image_url("ftp://example.com/a.png"));
    assert!(!is_valid_image_url("not a url"));
  }

  #[test]
  fn test_validate_password() {
    for password in ["\thello", " hello", "hello ", ""] {
      let password = Sensitive::new(password.to_string());
      assert!(validate_password(&password).is_err(), "{password:?}");
    }

    let too_long = Sensitive::new("x".repeat(PASSWORD_MAX + 1));
    assert!(validate_password(&too_long).is_err());

    let password = Sensitive::new("pw1".to_string());
    assert!(validate_password(&password).is_ok());
  }

  #[test]
  fn test_validate_not_blank() {
    assert!(validate_not_blank("Social").is_ok());
    assert!(validate_not_blank("   ").is_err());
    assert!(validate_not_blank("").is_err());
  }
}
