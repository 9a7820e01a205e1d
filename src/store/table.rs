use std::marker::PhantomData;

use crate::types::id::{marker::Marker, Id};

/// A stored record that knows its own identifier.
pub trait Record {
  type Marker: Marker;

  fn id(&self) -> Id<Self::Marker>;
}

/// Records kept in ascending id order alongside a monotonic counter.
///
/// Identifiers are never reused. Lookups binary-search by id rather than
/// index by offset, so gaps in the sequence are allowed.
#[derive(Debug)]
pub struct Table<T: Record> {
  rows: Vec<T>,
  last_id: u64,
  phantom: PhantomData<T::Marker>,
}

impl<T: Record> Default for Table<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Record> Table<T> {
  #[must_use]
  pub const fn new() -> Self {
    Self {
      rows: Vec::new(),
      last_id: 0,
      phantom: PhantomData,
    }
  }

  /// Builds a record with the next id and stores it.
  pub fn insert_with(&mut self, build: impl FnOnce(Id<T::Marker>) -> T) -> &T {
    self.last_id += 1;
    let id = Id::new(self.last_id);
    let index = self.rows.len();
    self.rows.push(build(id));
    &self.rows[index]
  }

  #[must_use]
  pub fn get(&self, id: Id<T::Marker>) -> Option<&T> {
    self
      .rows
      .binary_search_by_key(&id.get(), |row| row.id().get())
      .ok()
      .map(|index| &self.rows[index])
  }

  /// Iterates over every record in creation order.
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.rows.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::id::marker::EventMarker;

  #[derive(Debug, PartialEq)]
  struct Row(Id<EventMarker>, &'static str);

  impl Record for Row {
    type Marker = EventMarker;

    fn id(&self) -> Id<EventMarker> {
      self.0
    }
  }

  #[test]
  fn test_ids_start_at_one() {
    let mut table = Table::<Row>::new();
    assert_eq!(table.iter().count(), 0);

    let first = table.insert_with(|id| Row(id, "a")).0;
    let second = table.insert_with(|id| Row(id, "b")).0;
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 2);
    assert_eq!(table.iter().count(), 2);
  }

  #[test]
  fn test_lookup() {
    let mut table = Table::<Row>::new();
    for name in ["a", "b", "c"] {
      table.insert_with(|id| Row(id, name));
    }

    assert_eq!(table.get(Id::new(2)).map(|row| row.1), Some("b"));
    assert_eq!(table.get(Id::new(4)), None);
    assert_eq!(table.get(Id::new(3)).map(|row| row.1), Some("c"));

    let names = table.iter().map(|row| row.1).collect::<Vec<_>>();
    assert_eq!(names, ["a", "b", "c"]);
  }
}
