//! Authentication endpoint handlers.

pub mod activity;
pub mod login;
pub mod me;

pub use activity::activity_handler;
pub use login::login_handler;
pub use me::me_handler;
