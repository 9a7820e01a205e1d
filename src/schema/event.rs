use serde::{Deserialize, Serialize};

use crate::types::id::marker::{EventMarker, UserMarker};
use crate::types::{id::Id, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
  pub id: Id<EventMarker>,
  pub title: String,
  pub date: Timestamp,
  pub location: String,
  pub description: String,
  pub category: String,
  pub image: Option<String>,
  /// Events are not attributed to their creators yet, it is always `None`.
  pub author_id: Option<Id<UserMarker>>,
}

/// Date of an event as submitted, before it is normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDate {
  At(Timestamp),
  /// Milliseconds since the UNIX epoch.
  Millis(i64),
  Iso8601(String),
}

impl From<Timestamp> for EventDate {
  fn from(value: Timestamp) -> Self {
    Self::At(value)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertEvent {
  pub title: String,
  pub date: EventDate,
  pub location: String,
  pub description: String,
  pub category: String,
  pub image: Option<String>,
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_serialized_shape() {
    let event = Event {
      id: Id::new(1),
      title: "Social".into(),
      date: Timestamp::from_millis(1_735_689_600_000).unwrap(),
      location: "Hall".into(),
      description: "Meet".into(),
      category: "Social".into(),
      image: None,
      author_id: None,
    };

    assert_eq!(
      serde_json::to_value(&event).unwrap(),
      json!({
        "id": 1,
        "title": "Social",
        "date": "2025-01-01T00:00:00.000Z",
        "location": "Hall",
        "description": "Meet",
        "category": "Social",
        "image": null,
        "authorId": null,
      })
    );
  }
}
