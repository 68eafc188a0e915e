//! # Strata Service
//!
//! Use-case layer: "get a user by id", shaped as a [`UserDto`].
//!
//! [`get_user_by_id`] depends only on the [`UserRepository`] capability from
//! `strata-core`. With default features disabled this crate has no database
//! dependency at all. The `legacy` feature adds [`legacy`], which threads a
//! concrete pool through the call instead.
//!
//! [`UserRepository`]: strata_core::UserRepository

pub mod dto;
pub mod r#impl;
#[cfg(feature = "legacy")]
pub mod legacy;
pub mod mappers;
pub mod user_service;

pub use dto::*;
pub use r#impl::{UserServiceComponent, UserServiceImpl};
pub use user_service::*;
