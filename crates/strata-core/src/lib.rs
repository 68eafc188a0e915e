//! # Strata Core
//!
//! Core types, traits, and error definitions shared by the data-access and
//! use-case layers.
//!
//! The [`UserRepository`] capability lives here rather than next to its SQL
//! implementation, so the use-case layer can depend on this crate alone.

pub mod context;
pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use context::*;
pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;

// Re-export shaku for dependency injection
pub use shaku::{module, Component, HasComponent, Interface};
