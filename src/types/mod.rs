pub mod error;
pub mod form;
pub mod id;
pub mod timestamp;
pub mod validation;

pub use error::Error;
pub use timestamp::Timestamp;
