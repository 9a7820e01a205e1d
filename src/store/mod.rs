//! In-memory registry of users and events.
//!
//! Each collection sits behind a single [`RwLock`] that is held for the
//! whole of every operation, so operations on the same collection never
//! interleave. Nothing is persisted; the state lives as long as the process.
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::schema::{Event, EventDate, InsertEvent, User};
use crate::types::form::events::EventFilter;
use crate::types::id::marker::{EventMarker, UserMarker};
use crate::types::id::Id;
use crate::types::Timestamp;

mod seed;
pub mod table;

use self::table::{Record, Table};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Username already exists")]
pub struct UsernameTaken;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Event date cannot be interpreted as a point in time")]
pub struct InvalidEventDate;

impl Record for User {
  type Marker = UserMarker;

  fn id(&self) -> Id<UserMarker> {
    self.id
  }
}

impl Record for Event {
  type Marker = EventMarker;

  fn id(&self) -> Id<EventMarker> {
    self.id
  }
}

#[derive(Debug, Default)]
struct Users {
  table: Table<User>,
  by_username: HashMap<String, Id<UserMarker>>,
}

#[derive(Debug, Default)]
pub struct EventStore {
  users: RwLock<Users>,
  events: RwLock<Table<Event>>,
}

impl EventStore {
  /// Creates an empty store.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a store seeded with the demonstration events.
  #[must_use]
  pub fn with_demo_events() -> Self {
    let store = Self::new();
    for event in seed::demo_events() {
      if let Err(error) = store.create_event(event) {
        tracing::warn!(?error, "skipped a demonstration event");
      }
    }
    store
  }
}

impl EventStore {
  /// Registers a user unless the username is already in use. The check
  /// and the insert happen under the same lock.
  #[tracing::instrument(skip(self, password_hash))]
  pub fn create_user(&self, username: &str, password_hash: String) -> Result<User, UsernameTaken> {
    let mut users = write(&self.users);
    if users.by_username.contains_key(username) {
      return Err(UsernameTaken);
    }

    let user = users
      .table
      .insert_with(|id| User {
        id,
        username: username.to_string(),
        password_hash,
      })
      .clone();

    users.by_username.insert(user.username.clone(), user.id);
    tracing::debug!(id = %user.id, "created user");

    Ok(user)
  }

  #[tracing::instrument(skip(self))]
  pub fn get_user(&self, id: Id<UserMarker>) -> Option<User> {
    read(&self.users).table.get(id).cloned()
  }

  /// Looks up a user by exact (case-sensitive) username.
  #[tracing::instrument(skip(self))]
  pub fn get_user_by_username(&self, username: &str) -> Option<User> {
    let users = read(&self.users);
    let id = users.by_username.get(username)?;
    users.table.get(*id).cloned()
  }
}

impl EventStore {
  /// Normalizes the date, assigns the next id and stores the event.
  ///
  /// An empty image is stored as `None`. If the date cannot be
  /// interpreted the store is left untouched and no id is consumed.
  #[tracing::instrument(skip_all, fields(title = %input.title))]
  pub fn create_event(&self, input: InsertEvent) -> Result<Event, InvalidEventDate> {
    let date = match input.date {
      EventDate::At(timestamp) => timestamp,
      EventDate::Millis(millis) => Timestamp::from_millis(millis).map_err(|_| InvalidEventDate)?,
      EventDate::Iso8601(text) => Timestamp::parse(&text).map_err(|_| InvalidEventDate)?,
    };
    let image = input.image.filter(|image| !image.is_empty());

    let mut events = write(&self.events);
    let event = events
      .insert_with(|id| Event {
        id,
        title: input.title,
        date,
        location: input.location,
        description: input.description,
        category: input.category,
        image,
        author_id: None,
      })
      .clone();

    tracing::debug!(id = %event.id, "created event");
    Ok(event)
  }

  #[tracing::instrument(skip(self))]
  pub fn get_event(&self, id: Id<EventMarker>) -> Option<Event> {
    read(&self.events).get(id).cloned()
  }

  /// Lists the events matching the filter, newest first. Events sharing
  /// a date keep their creation order.
  ///
  /// The category must match case-insensitively, and the search term must
  /// appear case-insensitively in the title, description or location.
  #[tracing::instrument(skip(self))]
  pub fn get_events(&self, filter: &EventFilter) -> Vec<Event> {
    let category = filter.category().map(str::to_lowercase);
    let search = filter.search().map(str::to_lowercase);

    let mut events = read(&self.events)
      .iter()
      .filter(|event| {
        category
          .as_deref()
          .map_or(true, |category| event.category.to_lowercase() == category)
      })
      .filter(|event| {
        search.as_deref().map_or(true, |term| {
          event.title.to_lowercase().contains(term)
            || event.description.to_lowercase().contains(term)
            || event.location.to_lowercase().contains(term)
        })
      })
      .cloned()
      .collect::<Vec<_>>();

    events.sort_by(|a, b| b.date.cmp(&a.date));
    events
  }

  /// Distinct categories in the order they were first used.
  #[tracing::instrument(skip(self))]
  pub fn get_event_categories(&self) -> Vec<String> {
    let events = read(&self.events);
    let mut categories: Vec<String> = Vec::new();
    for event in events.iter() {
      if !categories.contains(&event.category) {
        categories.push(event.category.clone());
      }
    }
    categories
  }
}

// Operations never panic while holding a guard, so the data behind a
// poisoned lock is still consistent.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
  lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
  lock.write().unwrap_or_else(PoisonError::into_inner)
}
