//! # Strata Repository
//!
//! Data access for the `users` table, in two wirings:
//!
//! ```text
//! layered                          legacy
//! -------                          ------
//! Service                          Service
//!   ↓ Arc<dyn UserRepository>        ↓ legacy::fetch_user(ctx, id, &pool)
//! SqlUserRepository (owns pool)    AnyPool (owned by whoever called)
//!   ↓                                ↓
//! MySQL / SQLite                   MySQL / SQLite
//! ```
//!
//! The layered [`SqlUserRepository`] captures the pool once and implements
//! [`strata_core::UserRepository`], so callers depend only on the trait.
//! [`legacy::fetch_user`] takes the pool on every call and swallows
//! lookup failures; it is kept to show the coupling it causes.

pub mod legacy;
pub mod pool;
pub mod sql;

pub use pool::*;
pub use sql::*;
pub use strata_core::UserRepository;
