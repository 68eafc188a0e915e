//! User service implementations.

use crate::dto::UserDto;
use crate::user_service::{self, UserService};
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use strata_core::{RequestContext, StrataResult, UserId, UserRepository};

/// Generic user service implementation (non-DI).
pub struct UserServiceImpl<R: UserRepository + ?Sized> {
    user_repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserServiceImpl<R> {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + ?Sized + 'static> UserService for UserServiceImpl<R> {
    async fn get_user_by_id(&self, ctx: &RequestContext, id: UserId) -> StrataResult<UserDto> {
        user_service::get_user_by_id(ctx, id, self.user_repository.as_ref()).await
    }
}

impl<R: UserRepository + ?Sized> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

/// Concrete user service component for Shaku DI.
///
/// Receives its repository through injection; never sees a database handle.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceComponent {
    /// Creates the component with an explicit repository.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn get_user_by_id(&self, ctx: &RequestContext, id: UserId) -> StrataResult<UserDto> {
        user_service::get_user_by_id(ctx, id, self.user_repository.as_ref()).await
    }
}
