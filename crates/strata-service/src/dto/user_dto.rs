//! User-related DTOs.

use serde::{Deserialize, Serialize};

/// Caller-facing view of a user.
///
/// Field-identical to the stored record today, but owned by this layer so
/// the storage schema can change without touching callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
}
