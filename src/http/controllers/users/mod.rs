mod login;
mod logout;
mod me;
mod register;

pub use login::login;
pub use logout::logout;
pub use me::me;
pub use register::register;
