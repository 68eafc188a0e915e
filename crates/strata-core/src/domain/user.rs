//! User record as stored in the `users` table.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A stored user row.
///
/// Read-only from this system's point of view: rows are created by the
/// storage backend and never mutated here. `Default` is the zero value the
/// legacy wiring hands back when a lookup fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary key.
    pub id: UserId,
    /// Display name.
    pub name: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns true if this is the zero value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.id.into_inner() == 0 && self.name.is_empty()
    }
}
