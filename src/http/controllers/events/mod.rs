mod categories;
mod create;
mod get;
mod list;

pub use categories::categories;
pub use create::create;
pub use get::get;
pub use list::list;
