//! Credential checks and sessions of signed-in users.
pub mod credentials;
pub mod session;

pub use session::{SessionClaims, SessionRegistry};
