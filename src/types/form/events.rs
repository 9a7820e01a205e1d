use either::Either;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::schema::{EventDate, InsertEvent};
use crate::types::validation::{error, is_valid_image_url, validate_not_blank};
use crate::types::Timestamp;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEvent {
  #[validate(custom(function = "validate_not_blank"))]
  pub title: String,
  /// Milliseconds since the UNIX epoch or an ISO 8601 string.
  #[serde(with = "either::serde_untagged")]
  #[validate(custom(function = "validate_event_date"))]
  pub date: Either<i64, String>,
  #[validate(custom(function = "validate_not_blank"))]
  pub location: String,
  #[validate(custom(function = "validate_not_blank"))]
  pub description: String,
  #[validate(custom(function = "validate_not_blank"))]
  pub category: String,
  #[serde(default)]
  #[validate(custom(function = "validate_image"))]
  pub image: Option<String>,
}

fn validate_event_date(date: &Either<i64, String>) -> Result<(), ValidationError> {
  let valid = match date {
    Either::Left(millis) => Timestamp::from_millis(*millis).is_ok(),
    Either::Right(text) => Timestamp::parse(text).is_ok(),
  };

  if valid {
    Ok(())
  } else {
    Err(error("date", "Invalid date"))
  }
}

fn validate_image(image: &str) -> Result<(), ValidationError> {
  if image.is_empty() || is_valid_image_url(image) {
    Ok(())
  } else {
    Err(error("url", "Image must be an http or https URL"))
  }
}

impl From<CreateEvent> for InsertEvent {
  fn from(form: CreateEvent) -> Self {
    Self {
      title: form.title,
      date: match form.date {
        Either::Left(millis) => EventDate::Millis(millis),
        Either::Right(text) => EventDate::Iso8601(text),
      },
      location: form.location,
      description: form.description,
      category: form.category,
      image: form.image,
    }
  }
}

/// Query of the event listing. Both criteria are optional and
/// empty strings are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EventFilter {
  pub category: Option<String>,
  pub search: Option<String>,
}

impl EventFilter {
  #[must_use]
  pub fn category(&self) -> Option<&str> {
    self.category.as_deref().filter(|v| !v.is_empty())
  }

  #[must_use]
  pub fn search(&self) -> Option<&str> {
    self.search.as_deref().filter(|v| !v.is_empty())
  }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn form(value: serde_json::Value) -> CreateEvent {
    serde_json::from_value(value).unwrap()
  }

  fn sample() -> serde_json::Value {
    json!({
      "title": "Social",
      "date": "2025-01-01T00:00:00Z",
      "location": "Hall",
      "description": "Meet",
      "category": "Social",
    })
  }

  #[test]
  fn test_accepts_both_date_forms() {
    let text = form(sample());
    assert!(text.validate().is_ok());
    assert_eq!(text.date, Either::Right("2025-01-01T00:00:00Z".to_string()));

    let mut value = sample();
    value["date"] = json!(1_735_689_600_000_i64);
    let millis = form(value);
    assert!(millis.validate().is_ok());
    assert_eq!(millis.date, Either::Left(1_735_689_600_000));
  }

  #[test]
  fn test_rejects_blank_fields() {
    for field in ["title", "location", "description", "category"] {
      let mut value = sample();
      value[field] = json!("   ");
      let errors = form(value).validate().unwrap_err();
      assert!(errors.field_errors().contains_key(field), "{field}");
    }
  }

  #[test]
  fn test_rejects_unparseable_date() {
    let mut value = sample();
    value["date"] = json!("next friday");
    let errors = form(value).validate().unwrap_err();
    assert!(errors.field_errors().contains_key("date"));
  }

  #[test]
  fn test_image_rules() {
    let mut value = sample();
    value["image"] = json!("");
    assert!(form(value).validate().is_ok());

    let mut value = sample();
    value["image"] = json!("javascript:alert(1)");
    assert!(form(value).validate().is_err());

    let mut value = sample();
    value["image"] = json!("https://example.com/a.png");
    assert!(form(value).validate().is_ok());
  }

  #[test]
  fn test_filter_ignores_empty_strings() {
    let filter = EventFilter {
      category: Some(String::new()),
      search: Some("food".into()),
    };
    assert_eq!(filter.category(), None);
    assert_eq!(filter.search(), Some("food"));
  }
}
