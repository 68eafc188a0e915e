//! Capabilities the use-case layer depends on.

use crate::{RequestContext, StrataResult, User, UserId};
use async_trait::async_trait;
use shaku::Interface;

/// Something that can fetch a stored [`User`] by primary key.
///
/// The use-case layer is written against this trait only. The SQL
/// implementation lives in `strata-repository` and is injected by the caller;
/// tests inject in-memory doubles.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Fetches the user with the given ID.
    ///
    /// Returns [`StrataError::NotFound`](crate::StrataError::NotFound) when no
    /// row matches, [`StrataError::Database`](crate::StrataError::Database) on
    /// backend failure, and a context error when `ctx` ends first.
    async fn find_by_id(&self, ctx: &RequestContext, id: UserId) -> StrataResult<User>;
}
