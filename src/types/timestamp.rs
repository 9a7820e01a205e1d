use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;
use std::ops::Deref;
use std::str::FromStr;
use thiserror::Error;

/// A point in time in UTC.
///
/// It is displayed and serialized as an RFC 3339 string with millisecond
/// precision and a `Z` suffix, for example `2025-01-01T00:00:00.000Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
  #[must_use]
  pub fn now() -> Self {
    Self(Utc::now())
  }

  pub fn from_millis(millis: i64) -> Result<Self, InvalidTimestamp> {
    Utc.timestamp_millis_opt(millis)
      .single()
      .map(Self)
      .ok_or(InvalidTimestamp)
  }

  /// Parses an ISO 8601 date or date-time.
  ///
  /// Accepted forms are RFC 3339 (`2025-01-01T00:00:00Z`), date-times
  /// without an offset (`2025-04-15T18:00:00`, taken as UTC) and plain
  /// dates (`2025-04-15`, taken as midnight UTC).
  pub fn parse(input: &str) -> Result<Self, ParseError> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
      return Ok(Self(dt.with_timezone(&Utc)));
    }

    const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];
    for format in NAIVE_FORMATS {
      if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
        return Ok(Self(dt.and_utc()));
      }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
      .ok()
      .and_then(|date| date.and_hms_opt(0, 0, 0))
      .map(|dt| Self(dt.and_utc()))
      .ok_or_else(|| ParseError(input.to_string()))
  }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
  fn from(dt: DateTime<Tz>) -> Self {
    Self(dt.with_timezone(&Utc))
  }
}

impl From<NaiveDateTime> for Timestamp {
  fn from(value: NaiveDateTime) -> Self {
    Self(value.and_utc())
  }
}

impl Display for Timestamp {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = self.0.to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    s.fmt(f)
  }
}

impl Deref for Timestamp {
  type Target = DateTime<Utc>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl FromStr for Timestamp {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    struct Visitor;

    impl<'de> serde::de::Visitor<'de> for Visitor {
      type Value = Timestamp;

      fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ISO 8601 timestamp or milliseconds since UNIX epoch")
      }

      fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
      where
        E: serde::de::Error,
      {
        Timestamp::from_millis(v).map_err(serde::de::Error::custom)
      }

      fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
      where
        E: serde::de::Error,
      {
        let millis = i64::try_from(v).map_err(|_| serde::de::Error::custom(InvalidTimestamp))?;
        self.visit_i64(millis)
      }

      fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
      where
        E: serde::de::Error,
      {
        Timestamp::parse(v).map_err(serde::de::Error::custom)
      }
    }

    deserializer.deserialize_any(Visitor)
  }
}

impl serde::Serialize for Timestamp {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.collect_str(self)
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Timestamp is out of range")]
pub struct InvalidTimestamp;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid ISO 8601 timestamp: {0:?}")]
pub struct ParseError(String);

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::Token;

  #[test]
  fn test_fmt_display_impl() {
    let timestamp = Timestamp::from_millis(1_735_689_600_000).unwrap();
    assert_eq!("2025-01-01T00:00:00.000Z", timestamp.to_string());
  }

  #[test]
  fn test_parse_forms() {
    let expected = Timestamp::from_millis(1_735_689_600_000).unwrap();
    assert_eq!(Ok(expected), Timestamp::parse("2025-01-01T00:00:00Z"));
    assert_eq!(Ok(expected), Timestamp::parse("2025-01-01T00:00:00.000Z"));
    assert_eq!(Ok(expected), Timestamp::parse("2025-01-01T02:00:00+02:00"));
    assert_eq!(Ok(expected), Timestamp::parse("2025-01-01T00:00:00"));
    assert_eq!(Ok(expected), Timestamp::parse("2025-01-01T00:00"));
    assert_eq!(Ok(expected), Timestamp::parse("2025-01-01"));
  }

  #[test]
  fn test_parse_rejects_garbage() {
    assert!(Timestamp::parse("").is_err());
    assert!(Timestamp::parse("tomorrow").is_err());
    assert!(Timestamp::parse("2025-13-01").is_err());
  }

  #[test]
  fn test_serde_impl() {
    let timestamp = Timestamp::from_millis(1_735_689_600_000).unwrap();
    serde_test::assert_tokens(&timestamp, &[Token::Str("2025-01-01T00:00:00.000Z")]);
    serde_test::assert_de_tokens(&timestamp, &[Token::I64(1_735_689_600_000)]);
    serde_test::assert_de_tokens(&timestamp, &[Token::U64(1_735_689_600_000)]);
  }

  #[test]
  fn test_ordering() {
    let earlier = Timestamp::parse("2025-04-15T18:00:00").unwrap();
    let later = Timestamp::parse("2025-06-01T17:30:00").unwrap();
    assert!(earlier < later);
  }
}
