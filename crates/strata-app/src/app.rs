//! Runs one lookup through the selected wiring.

use crate::di::{build_lookup_module, LookupResolver};
use clap::ValueEnum;
use strata_config::AppConfig;
use strata_core::{RequestContext, StrataResult, UserId};
use strata_repository::{DatabasePool, DatabasePoolInterface};
use strata_service::{legacy, UserDto, UserService};
use tracing::{info, warn};

/// How the use-case layer reaches the data-access layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Wiring {
    /// Use case depends on an injected `UserRepository`; errors propagate.
    Layered,
    /// Use case takes the raw pool; failures become a zero-valued user.
    Legacy,
    /// Use case opens its own pool per call; failures become a zero-valued user.
    SelfConnecting,
}

impl std::fmt::Display for Wiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Layered => "layered",
            Self::Legacy => "legacy",
            Self::SelfConnecting => "self-connecting",
        };
        f.write_str(name)
    }
}

/// One lookup to perform.
#[derive(Debug, Clone, Copy)]
pub struct LookupRequest {
    pub id: UserId,
    pub wiring: Wiring,
    pub migrate: bool,
}

/// Connects to the configured database and runs `request` under `ctx`.
///
/// The pool is owned here and closed before returning, after every call
/// made through it has finished.
///
/// # Errors
///
/// Connection and migration failures, plus whatever the layered wiring
/// propagates. Connecting and migrating run under `ctx`, so a cancelled or
/// expired context fails them with `Cancelled` or `DeadlineExceeded`. The
/// legacy wirings only fail before the lookup starts.
pub async fn run_lookup(
    config: &AppConfig,
    request: &LookupRequest,
    ctx: &RequestContext,
) -> StrataResult<UserDto> {
    info!(user_id = %request.id, wiring = %request.wiring, "Running lookup");

    if request.wiring == Wiring::SelfConnecting {
        if request.migrate {
            warn!("--migrate is ignored by the self-connecting wiring");
        }
        return legacy::get_user_by_id_self_connecting(ctx, request.id, &config.database).await;
    }

    let pool = ctx.run(DatabasePool::new(&config.database)).await?;
    let result = lookup_with_pool(&pool, request, ctx).await;

    pool.close().await;
    result
}

async fn lookup_with_pool(
    pool: &DatabasePool,
    request: &LookupRequest,
    ctx: &RequestContext,
) -> StrataResult<UserDto> {
    if request.migrate {
        ctx.run(pool.run_migrations()).await?;
    }

    if request.wiring == Wiring::Layered {
        let module = build_lookup_module(pool);
        module.user_service().get_user_by_id(ctx, request.id).await
    } else {
        legacy::get_user_by_id(ctx, request.id, pool.inner()).await
    }
}
