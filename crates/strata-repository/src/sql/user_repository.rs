//! SQL user repository implementation.

use crate::DatabasePoolInterface;
use async_trait::async_trait;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use strata_core::{RequestContext, StrataError, StrataResult, User, UserId, UserRepository};
use tracing::debug;

/// Single-row lookup by primary key.
pub(crate) const SELECT_USER_BY_ID: &str = "SELECT id, name FROM users WHERE id = ?";

/// Database row representation of a user.
#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    id: i64,
    name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(row.id, row.name)
    }
}

/// User repository that owns its connection pool.
///
/// The pool is captured once at construction and must outlive every call
/// made through this repository.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct SqlUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqlUserRepository {
    /// Creates a new SQL user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

impl std::fmt::Debug for SqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlUserRepository").finish_non_exhaustive()
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_by_id(&self, ctx: &RequestContext, id: UserId) -> StrataResult<User> {
        debug!("Finding user by id: {}", id);

        let row = ctx
            .run(async {
                sqlx::query_as::<_, UserRow>(SELECT_USER_BY_ID)
                    .bind(id.into_inner())
                    .fetch_optional(self.pool.inner())
                    .await
                    .map_err(StrataError::from)
            })
            .await?;

        row.map(User::from)
            .ok_or_else(|| StrataError::not_found("User", id))
    }
}
