mod event;
mod user;

pub use event::{Event, EventDate, InsertEvent};
pub use user::User;
