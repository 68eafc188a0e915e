//! Dependency injection module using Shaku.
//!
//! The layered wiring is assembled here, outside both layers: the pool is
//! injected into [`SqlUserRepository`], which is injected into
//! [`UserServiceComponent`] as an `Arc<dyn UserRepository>`.

use std::sync::Arc;
use strata_core::{module, HasComponent, UserRepository};
use strata_repository::{DatabasePool, DatabasePoolInterface, DatabasePoolParameters, SqlUserRepository};
use strata_service::{UserService, UserServiceComponent};

module! {
    pub LookupModule {
        components = [
            DatabasePool,
            SqlUserRepository,
            UserServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the lookup module around an existing pool.
#[must_use]
pub fn build_lookup_module(pool: &DatabasePool) -> Arc<LookupModule> {
    let module = LookupModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: pool.inner().clone(),
        })
        .build();

    Arc::new(module)
}

/// Trait for resolving components from the module.
pub trait LookupResolver {
    /// Resolves the user service.
    fn user_service(&self) -> Arc<dyn UserService>;

    /// Resolves the user repository.
    fn user_repository(&self) -> Arc<dyn UserRepository>;

    /// Resolves the database pool.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl LookupResolver for LookupModule {
    fn user_service(&self) -> Arc<dyn UserService> {
        self.resolve()
    }

    fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.resolve()
    }

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
