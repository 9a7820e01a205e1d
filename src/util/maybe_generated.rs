use std::fmt::Display;

/// Tells whether a value was produced by a generator or explicitly set
/// (from deserialization or declaration).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaybeGenerated<T> {
  Generated(T),
  Set(T),
}

impl<T: std::fmt::Debug> std::fmt::Debug for MaybeGenerated<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Generated(..) => write!(f, "Generated("),
      Self::Set(..) => write!(f, "Set("),
    }?;
    self.value().fmt(f)?;
    write!(f, ")")
  }
}

impl<T: Display> Display for MaybeGenerated<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.value().fmt(f)
  }
}

impl<T> MaybeGenerated<T> {
  pub const fn new(value: T) -> Self {
    Self::Set(value)
  }

  pub const fn is_generated(&self) -> bool {
    matches!(self, Self::Generated(..))
  }

  pub const fn value(&self) -> &T {
    match self {
      MaybeGenerated::Set(n) | MaybeGenerated::Generated(n) => n,
    }
  }

  pub fn into_value(self) -> T {
    match self {
      MaybeGenerated::Set(n) | MaybeGenerated::Generated(n) => n,
    }
  }
}

impl<T> std::ops::Deref for MaybeGenerated<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    self.value()
  }
}

impl<T> From<T> for MaybeGenerated<T> {
  fn from(t: T) -> Self {
    MaybeGenerated::Set(t)
  }
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for MaybeGenerated<T> {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    Ok(Self::Set(T::deserialize(deserializer)?))
  }
}

impl<T: serde::Serialize> serde::Serialize for MaybeGenerated<T> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    self.value().serialize(serializer)
  }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
  use std::collections::BTreeMap;

  use super::MaybeGenerated;
  use serde::{Deserialize, Serialize};
  use serde_test::Token;

  #[test]
  fn test_serialization() {
    #[derive(Deserialize, Serialize)]
    struct Session {
      #[serde(default = "generator")]
      secret: MaybeGenerated<String>,
    }

    fn generator() -> MaybeGenerated<String> {
      MaybeGenerated::Generated("auto-generated".to_string())
    }

    serde_test::assert_tokens(
      &MaybeGenerated::Set("Hello".to_string()),
      &[Token::Str("Hello")],
    );

    let mut map = BTreeMap::new();
    map.insert(
      serde_value::Value::String("secret".into()),
      serde_value::Value::String("set".into()),
    );

    let output = serde_value::Value::Map(map)
      .deserialize_into::<Session>()
      .unwrap();

    assert_eq!(MaybeGenerated::Set("set".to_string()), output.secret);

    let output = serde_value::Value::Map(Default::default())
      .deserialize_into::<Session>()
      .unwrap();

    assert_eq!(generator(), output.secret);
    assert!(output.secret.is_generated());
  }

  #[test]
  fn test_debug_keeps_origin() {
    let value = MaybeGenerated::Generated(5);
    assert_eq!(format!("{value:?}"), "Generated(5)");
    assert_eq!(format!("{}", MaybeGenerated::new(5)), "5");
  }
}
