//! Store wrappers for use cases.

mod user;

pub use user::UserStore;
