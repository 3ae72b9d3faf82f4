use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Halo: HDR bloom post-processing, rendered headless.
#[derive(Parser, Debug)]
#[command(name = "halo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bloom a synthetic HDR test pattern and write it as PNG.
    Render(RenderArgs),

    /// Print the effective config as JSON.
    Config {
        /// Also write the effective config as TOML to this path.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Write the commented default config file.
    InitConfig {
        /// Destination (defaults to the platform config path).
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    /// Output PNG path.
    #[arg(short, long)]
    pub out: PathBuf,

    /// Width override (defaults to `render.width`).
    #[arg(long)]
    pub width: Option<u32>,

    /// Height override (defaults to `render.height`).
    #[arg(long)]
    pub height: Option<u32>,

    /// Use the CPU reference instead of the GPU.
    #[arg(long)]
    pub cpu: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_with_overrides() {
        let args = Args::try_parse_from([
            "halo", "render", "--out", "a.png", "--width", "64", "--height", "32", "--cpu",
        ])
        .unwrap();
        match args.command {
            Command::Render(r) => {
                assert_eq!(r.out, PathBuf::from("a.png"));
                assert_eq!(r.width, Some(64));
                assert_eq!(r.height, Some(32));
                assert!(r.cpu);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "halo",
            "config",
            "--config",
            "/tmp/halo.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/halo.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(args.command, Command::Config { save: None }));
    }

    #[test]
    fn init_config_defaults() {
        let args = Args::try_parse_from(["halo", "init-config"]).unwrap();
        assert!(matches!(
            args.command,
            Command::InitConfig {
                path: None,
                force: false
            }
        ));
    }

    #[test]
    fn render_requires_out() {
        assert!(Args::try_parse_from(["halo", "render"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["halo"]).is_err());
    }
}
