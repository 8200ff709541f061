//! Configuration management for Workbench.
//!
//! Parses `workbench.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `docs.context_dir`
//! - `site.name`
//! - `site.product`
//! - `site.version`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use expand::Expander;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override the design-system context directory.
    pub context_dir: Option<PathBuf>,
    /// Override live reload enabled flag.
    pub live_reload_enabled: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "workbench.toml";

/// Default context directory name, relative to the config file.
const DEFAULT_CONTEXT_DIR: &str = ".design-system-context";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Site presentation settings.
    pub site: SiteConfig,
    /// Live reload configuration.
    pub live_reload: LiveReloadConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    context_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Root of the design-system context (holds `system/`, `tasks/`, `WORKFLOW.md`).
    pub context_dir: PathBuf,
}

/// Site presentation settings shown in page chrome.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Design system name shown in the home page header.
    pub name: String,
    /// Product line shown in page footers.
    pub product: String,
    /// Documentation version badge.
    pub version: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Helix".to_owned(),
            product: "TimelyCare Design System".to_owned(),
            version: "v1.0.0".to_owned(),
        }
    }
}

/// Live reload configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LiveReloadConfig {
    /// Whether live reload is enabled.
    pub enabled: bool,
    /// File patterns to watch for changes.
    pub watch_patterns: Option<Vec<String>>,
}

impl Default for LiveReloadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            watch_patterns: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`WB_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `workbench.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The merged result
    /// is validated last.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Watch patterns for live reload, falling back to markdown files.
    #[must_use]
    pub fn watch_patterns(&self) -> Vec<String> {
        self.live_reload
            .watch_patterns
            .clone()
            .unwrap_or_else(|| vec!["**/*.md".to_owned()])
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(context_dir) = &settings.context_dir {
            self.docs_resolved.context_dir.clone_from(context_dir);
        }
        if let Some(live_reload_enabled) = settings.live_reload_enabled {
            self.live_reload.enabled = live_reload_enabled;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            docs: DocsConfigRaw::default(),
            site: SiteConfig::default(),
            live_reload: LiveReloadConfig::default(),
            docs_resolved: DocsConfig {
                context_dir: base.join(DEFAULT_CONTEXT_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called by [`Config::load`] once CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 lets the OS pick, which is never what a config file means
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        if let Some(patterns) = &self.live_reload.watch_patterns {
            if patterns.is_empty() {
                return Err(ConfigError::Validation(
                    "live_reload.watch_patterns cannot be empty".to_owned(),
                ));
            }
            for pattern in patterns {
                require_non_empty(pattern, "live_reload.watch_patterns")?;
            }
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.expand_with(&expand::from_env())
    }

    fn expand_with<L>(&mut self, expander: &Expander<L>) -> Result<(), ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        expander.expand("server.host", &mut self.server.host)?;
        if let Some(context_dir) = &mut self.docs.context_dir {
            expander.expand("docs.context_dir", context_dir)?;
        }
        expander.expand("site.name", &mut self.site.name)?;
        expander.expand("site.product", &mut self.site.product)?;
        expander.expand("site.version", &mut self.site.version)?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            context_dir: config_dir.join(
                self.docs
                    .context_dir
                    .as_deref()
                    .unwrap_or(DEFAULT_CONTEXT_DIR),
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(
            config.docs_resolved.context_dir,
            PathBuf::from("/test/.design-system-context")
        );
        assert_eq!(config.site.name, "Helix");
        assert_eq!(config.site.version, "v1.0.0");
        assert!(config.live_reload.enabled);
        assert_eq!(config.watch_patterns(), vec!["**/*.md".to_owned()]);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.site.product, "TimelyCare Design System");
    }

    #[test]
    fn test_parse_server_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
name = "Atlas"
product = "Acme UI"
version = "v2.3.0"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.name, "Atlas");
        assert_eq!(config.site.product, "Acme UI");
        assert_eq!(config.site.version, "v2.3.0");
    }

    #[test]
    fn test_parse_live_reload_config() {
        let toml = r#"
[live_reload]
enabled = false
watch_patterns = ["**/*.md", "**/*.yaml"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.live_reload.enabled);
        assert_eq!(
            config.watch_patterns(),
            vec!["**/*.md".to_owned(), "**/*.yaml".to_owned()]
        );
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
context_dir = "design"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.context_dir,
            PathBuf::from("/project/design")
        );
    }

    #[test]
    fn test_resolve_paths_default_context_dir() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.context_dir,
            PathBuf::from("/project/.design-system-context")
        );
    }

    #[test]
    fn test_apply_cli_settings_host() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7979); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_context_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            context_dir: Some(PathBuf::from("/custom/context")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.context_dir,
            PathBuf::from("/custom/context")
        );
    }

    #[test]
    fn test_apply_cli_settings_live_reload() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            live_reload_enabled: Some(false),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert!(!config.live_reload.enabled);
    }

    #[test]
    fn test_apply_cli_settings_none_keeps_values() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert!(config.live_reload.enabled);
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.port = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.host = String::new();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.host"));
    }

    #[test]
    fn test_validate_rejects_empty_watch_patterns() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.live_reload.watch_patterns = Some(Vec::new());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("watch_patterns"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/workbench.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbench.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 8181

[docs]
context_dir = "ctx"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 8181);
        assert_eq!(config.docs_resolved.context_dir, dir.path().join("ctx"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_applies_cli_settings_last() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbench.toml");
        std::fs::write(&path, "[server]\nport = 8181\n").unwrap();

        let settings = CliSettings {
            port: Some(9191),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.server.port, 9191);
    }

    #[test]
    fn test_load_rejects_port_zero_from_cli() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbench.toml");
        std::fs::write(&path, "[server]\nport = 8181\n").unwrap();

        let settings = CliSettings {
            port: Some(0),
            ..Default::default()
        };
        let result = Config::load(Some(&path), Some(&settings));

        assert!(
            matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("server.port"))
        );
    }

    #[test]
    fn test_load_rejects_empty_host_from_cli() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbench.toml");
        std::fs::write(&path, "").unwrap();

        let settings = CliSettings {
            host: Some(String::new()),
            ..Default::default()
        };
        let result = Config::load(Some(&path), Some(&settings));

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_expand_context_dir_before_resolution() {
        let toml = r#"
[docs]
context_dir = "${WB_DESIGN_ROOT}/context"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let expander =
            Expander::new(|name: &str| (name == "WB_DESIGN_ROOT").then(|| "shared".to_owned()));

        config.expand_with(&expander).unwrap();
        config.resolve_paths(Path::new("/work"));

        assert_eq!(
            config.docs_resolved.context_dir,
            PathBuf::from("/work/shared/context")
        );
    }

    #[test]
    fn test_expand_reports_unset_host_variable() {
        let toml = r#"
[server]
host = "${WB_BIND_HOST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();

        let err = config.expand_with(&Expander::new(|_: &str| None)).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "server.host"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbench.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
