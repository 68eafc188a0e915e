//! Pool-threaded data access, kept for comparison with [`SqlUserRepository`].
//!
//! [`fetch_user`] needs the caller's pool on every call, so everything above
//! it has to carry a concrete database handle too. It also keeps the
//! long-standing behaviour of discarding lookup failures: a missing row, a
//! backend error, a cancelled context and an expired deadline all come back
//! as `Ok(User::default())`.
//!
//! [`SqlUserRepository`]: crate::SqlUserRepository

use crate::sql::{UserRow, SELECT_USER_BY_ID};
use sqlx::AnyPool;
use strata_core::{RequestContext, StrataError, StrataResult, User, UserId};
use tracing::{debug, warn};

/// Fetches a user with an explicitly passed pool.
///
/// Never returns `Err`. Callers cannot tell "found" from "failed" except by
/// inspecting the returned record for the zero value.
pub async fn fetch_user(ctx: &RequestContext, id: UserId, pool: &AnyPool) -> StrataResult<User> {
    debug!("Legacy lookup of user: {}", id);

    let lookup = async {
        sqlx::query_as::<_, UserRow>(SELECT_USER_BY_ID)
            .bind(id.into_inner())
            .fetch_one(pool)
            .await
            .map(User::from)
            .map_err(StrataError::from)
    };

    match ctx.run(lookup).await {
        Ok(user) => Ok(user),
        Err(e) => {
            warn!(user_id = %id, error = %e, "Lookup failed, returning zero-valued user");
            Ok(User::default())
        }
    }
}
