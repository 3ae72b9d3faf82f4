mod cli;
mod commands;
mod output;
mod pattern;

use std::process::ExitCode;

use halo_common::HaloError;
use halo_config::schema::HaloConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

/// Pick the log directive: `--log-level` wins, then `logging.level` from the
/// config, then `info`.
fn log_directive(args: &Args, config: Option<&HaloConfig>) -> Directive {
    let requested = args
        .log_level
        .as_deref()
        .or_else(|| config.map(|c| c.logging.level.as_str()))
        .unwrap_or("info");
    requested
        .parse()
        .unwrap_or_else(|_| Directive::from(LevelFilter::INFO))
}

fn run(args: Args, config: HaloConfig) -> Result<(), HaloError> {
    match args.command {
        Command::Render(ref render) => commands::render(&config, render),
        Command::Config { ref save } => commands::show_config(&config, save.as_deref()),
        Command::InitConfig { path, force } => {
            let path = commands::init_config(path, force)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging so `logging.level` can apply; failures
    // are reported once the subscriber is up.
    let loaded = match args.command {
        Command::InitConfig { .. } => Ok(HaloConfig::default()),
        _ => halo_config::load_config(args.config.as_deref()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(log_directive(&args, loaded.as_ref().ok())),
        )
        .init();

    tracing::info!("Halo v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            HaloConfig::default()
        }
    };

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use halo_config::schema::LogLevel;

    fn level(filter: LevelFilter) -> String {
        Directive::from(filter).to_string()
    }

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["halo"];
        argv.extend_from_slice(extra);
        argv.push("config");
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn cli_log_level_wins_over_config() {
        let mut config = HaloConfig::default();
        config.logging.level = LogLevel::Error;
        let d = log_directive(&args(&["--log-level", "debug"]), Some(&config));
        assert_eq!(d.to_string(), level(LevelFilter::DEBUG));
    }

    #[test]
    fn config_log_level_used_without_flag() {
        let mut config = HaloConfig::default();
        config.logging.level = LogLevel::Warn;
        assert_eq!(
            log_directive(&args(&[]), Some(&config)).to_string(),
            level(LevelFilter::WARN)
        );
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(
            log_directive(&args(&[]), None).to_string(),
            level(LevelFilter::INFO)
        );
        assert_eq!(
            log_directive(&args(&["--log-level", "halo=loud"]), None).to_string(),
            level(LevelFilter::INFO)
        );
    }
}
