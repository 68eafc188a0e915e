//! User lookup use case.

use crate::dto::UserDto;
use async_trait::async_trait;
use strata_core::{Interface, RequestContext, StrataResult, UserId, UserRepository};
use tracing::debug;

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Gets a user by ID.
    async fn get_user_by_id(&self, ctx: &RequestContext, id: UserId) -> StrataResult<UserDto>;
}

/// Looks up one user through `repo` and projects it into a [`UserDto`].
///
/// Calls the repository exactly once. Errors are returned unchanged, so
/// callers can tell a missing row from a backend failure or an ended context.
///
/// # Errors
///
/// Whatever [`UserRepository::find_by_id`] returns.
pub async fn get_user_by_id<R>(ctx: &RequestContext, id: UserId, repo: &R) -> StrataResult<UserDto>
where
    R: UserRepository + ?Sized,
{
    debug!("Getting user: {}", id);

    let user = repo.find_by_id(ctx, id).await?;
    Ok(UserDto::from(user))
}
