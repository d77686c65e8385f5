//! Configuration loading and merging logic.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::ConfigError;
use crate::types::{AppConfig, DiffConfig, SpyglassConfig, WaitConfig};
use crate::validation::validate_config;

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.spyglass/config.toml`)
/// 3. Project config (`./.spyglass/config.toml`)
///
/// # Errors
///
/// Returns an error if a file exists but cannot be parsed, or if the
/// merged result fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<SpyglassConfig, ConfigError> {
    let mut config = SpyglassConfig::default();

    if let Some(path) = user_config_path() {
        if let Some(user_config) = load_config_file(&path)? {
            debug!(event = "config.user_loaded", path = %path.display());
            config = merge_configs(config, user_config);
        }
    }

    let project_path = project_config_path();
    if let Some(project_config) = load_config_file(&project_path)? {
        debug!(event = "config.project_loaded", path = %project_path.display());
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".spyglass").join("config.toml"))
}

fn project_config_path() -> PathBuf {
    PathBuf::from(".spyglass").join("config.toml")
}

/// Load a configuration file. A missing file is `Ok(None)`; an
/// unreadable or unparsable file is an error.
fn load_config_file(path: &Path) -> Result<Option<SpyglassConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::IoError {
                message: format!("'{}': {}", path.display(), e),
            });
        }
    };

    let config: SpyglassConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;

    Ok(Some(config))
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Optional fields from the override replace base values only when
/// present.
pub fn merge_configs(base: SpyglassConfig, override_config: SpyglassConfig) -> SpyglassConfig {
    SpyglassConfig {
        platform: override_config.platform.or(base.platform),
        app: AppConfig {
            bundle_id: override_config.app.bundle_id.or(base.app.bundle_id),
            webview_marker: override_config
                .app
                .webview_marker
                .or(base.app.webview_marker),
        },
        wait: WaitConfig {
            condition_timeout_ms: override_config
                .wait
                .condition_timeout_ms
                .or(base.wait.condition_timeout_ms),
            poll_interval_ms: override_config
                .wait
                .poll_interval_ms
                .or(base.wait.poll_interval_ms),
            probe_timeout_ms: override_config
                .wait
                .probe_timeout_ms
                .or(base.wait.probe_timeout_ms),
            web_settle_ms: override_config
                .wait
                .web_settle_ms
                .or(base.wait.web_settle_ms),
        },
        diff: DiffConfig {
            grid_size: override_config.diff.grid_size.or(base.diff.grid_size),
            tolerance: override_config.diff.tolerance.or(base.diff.tolerance),
        },
    }
}
