//! CLI error types.

use wb_config::ConfigError;
use wb_server::ServerError;
use wb_site::SiteError;

use crate::export::ExportError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Server(#[from] ServerError),

    #[error("{0}")]
    Export(#[from] ExportError),

    #[error("Context directory not found: {}", .0.display())]
    MissingContext(std::path::PathBuf),
}
