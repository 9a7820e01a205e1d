//! Typed request and response bodies of the HTTP surface.
pub mod events;
pub mod users;
