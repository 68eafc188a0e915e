//! Storage-layer records.

mod user;

pub use user::User;
