use crate::errors::ConfigError;
use crate::types::SpyglassConfig;

/// Validate a fully merged configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] for values that would
/// make the polling engine or the image comparator misbehave: zero
/// timeouts/intervals, an out-of-range tolerance, a degenerate hash
/// grid, or empty identity strings.
pub fn validate_config(config: &SpyglassConfig) -> Result<(), ConfigError> {
    if config.wait.condition_timeout_ms() == 0 {
        return Err(invalid("wait.condition_timeout_ms must be greater than zero"));
    }

    if config.wait.poll_interval_ms() == 0 {
        return Err(invalid("wait.poll_interval_ms must be greater than zero"));
    }

    if config.wait.probe_timeout_ms() == 0 {
        return Err(invalid("wait.probe_timeout_ms must be greater than zero"));
    }

    let tolerance = config.diff.tolerance();
    if !(0.0..=1.0).contains(&tolerance) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "diff.tolerance must be between 0.0 and 1.0, got {}",
                tolerance
            ),
        });
    }

    if config.diff.grid_size() < 2 {
        return Err(invalid("diff.grid_size must be at least 2"));
    }

    if config.app.bundle_id().is_empty() {
        return Err(invalid("app.bundle_id must not be empty"));
    }

    if config.app.webview_marker().is_empty() {
        return Err(invalid("app.webview_marker must not be empty"));
    }

    Ok(())
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::InvalidConfiguration {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppConfig, DiffConfig, WaitConfig};

    #[test]
    fn test_default_config_is_valid() {
        let config = SpyglassConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = SpyglassConfig {
            wait: WaitConfig {
                condition_timeout_ms: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("condition_timeout_ms"));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let config = SpyglassConfig {
            wait: WaitConfig {
                poll_interval_ms: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_out_of_range_tolerance_rejected() {
        for tolerance in [-0.1, 1.5] {
            let config = SpyglassConfig {
                diff: DiffConfig {
                    tolerance: Some(tolerance),
                    ..Default::default()
                },
                ..Default::default()
            };
            let err = validate_config(&config).unwrap_err();
            assert!(err.to_string().contains("diff.tolerance"));
        }
    }

    #[test]
    fn test_boundary_tolerances_accepted() {
        for tolerance in [0.0, 1.0] {
            let config = SpyglassConfig {
                diff: DiffConfig {
                    tolerance: Some(tolerance),
                    ..Default::default()
                },
                ..Default::default()
            };
            assert!(validate_config(&config).is_ok());
        }
    }

    #[test]
    fn test_degenerate_grid_rejected() {
        let config = SpyglassConfig {
            diff: DiffConfig {
                grid_size: Some(1),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_bundle_id_rejected() {
        let config = SpyglassConfig {
            app: AppConfig {
                bundle_id: Some(String::new()),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("bundle_id"));
    }

    #[test]
    fn test_empty_webview_marker_rejected() {
        let config = SpyglassConfig {
            app: AppConfig {
                webview_marker: Some(String::new()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
