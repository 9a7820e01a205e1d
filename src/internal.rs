/// Prevents downstream crates from implementing traits that are
/// only meant to be implemented inside this crate.
pub trait Sealed {}
