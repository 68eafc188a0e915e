//! SQL-backed data access.

mod user_repository;

pub use user_repository::SqlUserRepository;
pub(crate) use user_repository::{UserRow, SELECT_USER_BY_ID};
