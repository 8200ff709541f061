//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod list;
pub(crate) mod serve;
pub(crate) mod todos;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use wb_config::{CliSettings, Config};
use wb_site::{Site, SiteConfig};
use wb_storage::FsStorage;

pub(crate) use build::BuildArgs;
pub(crate) use list::ListArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use todos::TodosArgs;

use crate::error::CliError;

/// Load configuration with an optional context directory override.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    context_dir: Option<PathBuf>,
) -> Result<Config, CliError> {
    let settings = CliSettings {
        context_dir,
        ..CliSettings::default()
    };
    Ok(Config::load(config_path, Some(&settings))?)
}

/// Open the site for the configured context directory.
///
/// Fails early when the directory is missing, since every category would
/// silently come back empty.
pub(crate) fn open_site(config: &Config) -> Result<Arc<Site>, CliError> {
    let context_dir = &config.docs_resolved.context_dir;
    if !context_dir.is_dir() {
        return Err(CliError::MissingContext(context_dir.clone()));
    }
    let storage = Arc::new(FsStorage::new(context_dir.clone()));
    Ok(Arc::new(Site::new(storage, SiteConfig::default())))
}
