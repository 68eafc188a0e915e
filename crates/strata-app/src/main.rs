//! # Strata
//!
//! Looks up one user by primary key and prints it as JSON.
//!
//! ```text
//! strata-app 1                       # layered wiring
//! strata-app 1 --wiring legacy       # pool threaded through the use case
//! ```

use clap::Parser;
use std::time::Duration;
use strata_app::cli::Cli;
use strata_app::{run_lookup, LookupRequest};
use strata_config::ConfigLoader;
use strata_core::telemetry::init_logging;
use strata_core::{RequestContext, StrataError, StrataResult, UserId};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> StrataResult<()> {
    let config_loader = ConfigLoader::new(cli.config_dir.as_str())?;
    let config = config_loader.get().await;

    init_logging(&config.observability.log_level, config.observability.format())?;

    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    let timeout = cli
        .timeout_ms
        .map_or_else(|| config.lookup.timeout(), Duration::from_millis);
    let ctx = RequestContext::with_timeout(timeout);

    let token = ctx.cancellation_token();
    tokio::spawn(async move {
        shutdown_signal().await;
        token.cancel();
    });

    let request = LookupRequest {
        id: UserId::new(cli.id),
        wiring: cli.wiring,
        migrate: cli.migrate,
    };

    let user = run_lookup(&config, &request, &ctx).await?;
    let json = serde_json::to_string_pretty(&user)
        .map_err(|e| StrataError::internal(format!("Failed to encode user: {e}")))?;
    println!("{json}");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, cancelling lookup...");
        }
        () = terminate => {
            info!("Received terminate signal, cancelling lookup...");
        }
    }
}
