//! `wb build` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::commands::{load_config, open_site};
use crate::error::CliError;
use crate::export::StaticExport;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site.
    #[arg(short, long)]
    out_dir: PathBuf,

    /// Design-system context directory (overrides config).
    #[arg(short = 'd', long)]
    context_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover workbench.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (info-level logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = load_config(self.config.as_deref(), self.context_dir)?;
        let site = open_site(&config)?;

        output.info(&format!(
            "Context: {}",
            config.docs_resolved.context_dir.display()
        ));
        output.info(&format!("Output: {}", self.out_dir.display()));

        let today = chrono::Local::now().date_naive();
        let summary = StaticExport::new(site, wb_server::site_info(&config), today)
            .export(&self.out_dir)?;

        for href in &summary.skipped {
            output.warning(&format!("Skipped {href} (removed during export)"));
        }
        output.success(&format!(
            "Exported {} documents, {} previews and {} assets",
            summary.docs, summary.previews, summary.assets
        ));

        Ok(())
    }
}
