//! Pool-threaded use case, kept for comparison with [`get_user_by_id`].
//!
//! Here the use-case layer names the concrete data-access function and takes
//! a raw pool from its caller, so it cannot run without a database. Lookup
//! failures are observed and dropped: the result is always `Ok`, holding a
//! zero-valued [`UserDto`] when anything went wrong.
//!
//! [`get_user_by_id`]: crate::get_user_by_id

use crate::dto::UserDto;
use sqlx::AnyPool;
use strata_config::DatabaseConfig;
use strata_core::{RequestContext, StrataResult, User, UserId};
use strata_repository::{legacy, DatabasePool, DatabasePoolInterface};
use tracing::{debug, warn};

/// Gets a user by ID using the caller's pool.
///
/// Never returns `Err`.
pub async fn get_user_by_id(ctx: &RequestContext, id: UserId, pool: &AnyPool) -> StrataResult<UserDto> {
    debug!("Legacy: getting user {}", id);

    let user = match legacy::fetch_user(ctx, id, pool).await {
        Ok(user) => user,
        Err(e) => {
            warn!(user_id = %id, error = %e, "Lookup failed, continuing with zero value");
            User::default()
        }
    };

    Ok(UserDto::from(user))
}

/// Gets a user by ID, opening and closing a private pool for the call.
///
/// The connection lifecycle is buried inside the use case: every call pays
/// for a fresh connection and nothing can be shared or substituted. A failed
/// connect is swallowed like any other lookup failure.
pub async fn get_user_by_id_self_connecting(
    ctx: &RequestContext,
    id: UserId,
    config: &DatabaseConfig,
) -> StrataResult<UserDto> {
    let pool = match ctx.run(DatabasePool::new(config)).await {
        Ok(pool) => pool,
        Err(e) => {
            warn!(user_id = %id, error = %e, "Connect failed, continuing with zero value");
            return Ok(UserDto::default());
        }
    };

    let dto = get_user_by_id(ctx, id, pool.inner()).await;
    pool.close().await;
    dto
}
