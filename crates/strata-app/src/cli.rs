//! Command-line interface.

use crate::app::Wiring;
use clap::Parser;

/// Look up one user by primary key.
#[derive(Debug, Parser)]
#[command(name = "strata-app", version, about)]
pub struct Cli {
    /// Primary key of the user to fetch.
    #[arg(allow_negative_numbers = true)]
    pub id: i64,

    /// Which dependency wiring to run the lookup through.
    #[arg(long, value_enum, default_value_t = Wiring::Layered)]
    pub wiring: Wiring,

    /// Directory holding `default.toml` and friends.
    #[arg(long, default_value = "./config")]
    pub config_dir: String,

    /// Override the configured lookup deadline, in milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Run migrations before the lookup.
    #[arg(long)]
    pub migrate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["strata-app", "1"]).unwrap();
        assert_eq!(cli.id, 1);
        assert_eq!(cli.wiring, Wiring::Layered);
        assert_eq!(cli.config_dir, "./config");
        assert!(cli.timeout_ms.is_none());
        assert!(!cli.migrate);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "strata-app",
            "-5",
            "--wiring",
            "self-connecting",
            "--config-dir",
            "/etc/strata",
            "--timeout-ms",
            "250",
            "--migrate",
        ])
        .unwrap();
        assert_eq!(cli.id, -5);
        assert_eq!(cli.wiring, Wiring::SelfConnecting);
        assert_eq!(cli.config_dir, "/etc/strata");
        assert_eq!(cli.timeout_ms, Some(250));
        assert!(cli.migrate);
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["strata-app", "alice"]).is_err());
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
