//! `wb serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use wb_config::{CliSettings, Config};
use wb_server::{ServerConfig, run_server};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover workbench.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Design-system context directory (overrides config).
    #[arg(short = 'd', long)]
    context_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (info-level logs).
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable live reload (default: enabled).
    #[arg(long)]
    live_reload: Option<bool>,

    /// Disable live reload.
    #[arg(long, conflicts_with = "live_reload")]
    no_live_reload: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            live_reload_enabled: self.resolve_live_reload_enabled(),
            host: self.host,
            port: self.port,
            context_dir: self.context_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let context_dir = &config.docs_resolved.context_dir;
        output.info(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Context directory: {}", context_dir.display()));
        if !context_dir.is_dir() {
            output.warning("Context directory does not exist yet; every category is empty");
        }
        if config.live_reload.enabled {
            output.info("Live reload: enabled");
        } else {
            output.info("Live reload: disabled");
        }

        run_server(ServerConfig::from_config(&config, version)).await?;

        Ok(())
    }

    /// Resolve `live_reload_enabled` from --live-reload/--no-live-reload flags.
    fn resolve_live_reload_enabled(&self) -> Option<bool> {
        self.no_live_reload.then_some(false).or(self.live_reload)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ServeArgs,
    }

    fn parse(args: &[&str]) -> ServeArgs {
        TestCli::parse_from(std::iter::once("wb").chain(args.iter().copied())).args
    }

    #[test]
    fn test_live_reload_flags() {
        assert_eq!(parse(&[]).resolve_live_reload_enabled(), None);
        assert_eq!(parse(&["--no-live-reload"]).resolve_live_reload_enabled(), Some(false));
        assert_eq!(
            parse(&["--live-reload", "true"]).resolve_live_reload_enabled(),
            Some(true)
        );
    }

    #[test]
    fn test_overrides_parse() {
        let args = parse(&["-d", "ctx", "--host", "0.0.0.0", "-p", "8080", "-v"]);

        assert_eq!(args.context_dir, Some(PathBuf::from("ctx")));
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(8080));
        assert!(args.verbose);
    }
}
