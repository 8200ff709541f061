//! `wb list` command implementation.

use std::path::PathBuf;

use clap::Args;
use wb_site::NavSection;

use crate::commands::{load_config, open_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Design-system context directory (overrides config).
    #[arg(short = 'd', long)]
    context_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover workbench.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ListArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = load_config(self.config.as_deref(), self.context_dir)?;
        let navigation = open_site(&config)?.navigation()?;

        if navigation.is_empty() {
            output.warning("No documents found");
            return Ok(());
        }
        for section in &navigation {
            output.heading(&section_heading(section));
            for item in &section.items {
                output.line_with_note(&format!("  {}", item.title), &item.path);
            }
        }

        Ok(())
    }
}

fn section_heading(section: &NavSection) -> String {
    format!("{} ({})", section.label, section.items.len())
}
