//! Configuration loading for the CRYPTODASH TUI.
//!
//! A TOML file is optional. Without `--config` or `CRYPTODASH_CONFIG` the
//! built-in defaults are used; a file, when given, must spell out every
//! field.

use cryptodash_core::NavSection;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Location the rail starts on.
    pub default_location: String,
    /// Logical width units per terminal column.
    pub cell_width: u32,
    pub log_path: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub theme: ThemeConfig,
    pub mock: MockConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MockConfig {
    pub seed: u64,
    pub chart_points: usize,
    pub sparkline_points: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing value after --config")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            default_location: "/crypto".to_string(),
            cell_width: 8,
            log_path: PathBuf::from("cryptodash.log"),
            log_filter: "cryptodash_tui=info,cryptodash_core=info".to_string(),
            theme: ThemeConfig {
                name: "synthbrute".to_string(),
            },
            mock: MockConfig {
                seed: 42,
                chart_points: 60,
                sparkline_points: 10,
            },
        }
    }
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = match config_path_from_args()? {
            Some(path) => Some(path),
            None => config_path_from_env(),
        };
        let config = match path {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_location.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "default_location",
                reason: "must not be empty".to_string(),
            });
        }
        if self.cell_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cell_width",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_filter",
                reason: "must not be empty".to_string(),
            });
        }
        if !matches!(
            self.theme.name.to_ascii_lowercase().as_str(),
            "synthbrute" | "daylight"
        ) {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'synthbrute' and 'daylight' are supported".to_string(),
            });
        }
        if self.mock.chart_points < 2 {
            return Err(ConfigError::InvalidValue {
                field: "mock.chart_points",
                reason: "must be >= 2".to_string(),
            });
        }
        if self.mock.sparkline_points < 2 {
            return Err(ConfigError::InvalidValue {
                field: "mock.sparkline_points",
                reason: "must be >= 2".to_string(),
            });
        }
        Ok(())
    }

    /// Checks that `default_location` names a page that exists in `menu`.
    pub fn validate_against_menu(&self, menu: &[NavSection]) -> Result<(), ConfigError> {
        let found = menu.iter().any(|section| {
            section
                .nodes
                .iter()
                .any(|node| node.contains_page(&self.default_location))
        });
        if found {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "default_location",
                reason: format!("'{}' does not match any page in the menu", self.default_location),
            })
        }
    }

    /// Built-in theme selection.
    pub fn starts_dark(&self) -> bool {
        self.theme.name.eq_ignore_ascii_case("synthbrute")
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("CRYPTODASH_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Result<Option<PathBuf>, ConfigError> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args
                .next()
                .map(|path| Some(PathBuf::from(path)))
                .ok_or(ConfigError::MissingConfigPath);
        }
    }
    Ok(None)
}
