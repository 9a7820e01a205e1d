pub mod figment;
pub mod maybe_generated;
pub mod sensitive;
pub mod validator;

pub use maybe_generated::MaybeGenerated;
pub use sensitive::Sensitive;
