//! Configuration loading from callstat.toml
//!
//! Timer defaults can be kept in a `callstat.toml` file in the project root.
//! The file is discovered by walking up from the current directory.

use crate::DEFAULT_RUNS;
use crate::error::TimerError;
use crate::statistic::Statistic;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// File name looked up by [`TimerConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "callstat.toml";

/// Timer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Number of timed runs per call
    #[serde(default = "default_runs")]
    pub runs: usize,
    /// Print the human-readable report after every call
    #[serde(default = "default_print_report")]
    pub print_report: bool,
    /// Decimal places for printed metric values (unset = no rounding)
    #[serde(default)]
    pub round_floats: Option<u32>,
    /// Well-known statistics to compute, in report order
    #[serde(default = "default_stats")]
    pub stats: Vec<String>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            runs: default_runs(),
            print_report: default_print_report(),
            round_floats: None,
            stats: default_stats(),
        }
    }
}

fn default_runs() -> usize {
    DEFAULT_RUNS
}
fn default_print_report() -> bool {
    true
}
fn default_stats() -> Vec<String> {
    Statistic::defaults()
        .iter()
        .map(|s| s.name().to_string())
        .collect()
}

impl TimerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TimerError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TimerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded timer config");
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for `callstat.toml`
    ///
    /// A file that exists but fails to load is logged and treated as absent.
    pub fn discover_from(start: &Path) -> Option<Self> {
        for dir in start.ancestors() {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(err) => {
                        warn!(path = %config_path.display(), error = %err, "ignoring timer config");
                        None
                    }
                };
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# callstat configuration

# Timed runs per call of a wrapped function
runs = 10
# Print a report after every call
print_report = true
# Decimal places for printed values (uncomment to enable)
# round_floats = 4
# Statistics to compute: mean, median, min, max, stdev, total
stats = ["mean", "median", "max", "min", "stdev", "total"]
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TimerConfig::default();
        assert_eq!(config.runs, 10);
        assert!(config.print_report);
        assert_eq!(config.round_floats, None);
        assert_eq!(
            config.stats,
            ["mean", "median", "max", "min", "stdev", "total"]
        );
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            runs = 3
            round_floats = 2
        "#;

        let config: TimerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.runs, 3);
        assert_eq!(config.round_floats, Some(2));
        // Defaults should still apply
        assert!(config.print_report);
        assert_eq!(config.stats.len(), 6);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: TimerConfig = toml::from_str(&TimerConfig::default_toml()).unwrap();
        assert_eq!(config, TimerConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = TimerConfig::load("/definitely/not/here/callstat.toml").unwrap_err();
        assert!(matches!(err, TimerError::ConfigIo { .. }));
    }

    #[test]
    fn test_discover_from_walks_up() {
        let root = std::env::temp_dir().join(format!("callstat-discover-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join(CONFIG_FILE_NAME), "runs = 7\nprint_report = false\n").unwrap();

        let config = TimerConfig::discover_from(&nested).unwrap();
        assert_eq!(config.runs, 7);
        assert!(!config.print_report);

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_discover_ignores_invalid_file() {
        let root = std::env::temp_dir().join(format!("callstat-invalid-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join(CONFIG_FILE_NAME), "runs = \"many\"\n").unwrap();

        assert!(TimerConfig::discover_from(&root).is_none());

        std::fs::remove_dir_all(&root).unwrap();
    }
}
