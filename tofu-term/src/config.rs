//! Configuration for the tofu runner
//!
//! Precedence: CLI arguments > environment variables > config file >
//! defaults. The config file is TOML at the platform config directory
//! (`tofu/config.toml`) unless `--config` points elsewhere.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use tofu_shell::{SpinDelay, DEMO_SCRIPT};

/// CLI arguments for the tofu runner
#[derive(Parser, Debug, Clone)]
#[command(name = "tofu")]
#[command(version)]
#[command(about = "Run the tofu console demo headlessly", long_about = None)]
pub struct CliArgs {
    /// Path to custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Grid columns
    #[arg(long, value_name = "COLS")]
    pub cols: Option<u16>,

    /// Grid rows
    #[arg(long, value_name = "ROWS")]
    pub rows: Option<u16>,

    /// Busy-wait spins between commands (0 runs the script flat out)
    #[arg(long, value_name = "SPINS")]
    pub delay: Option<u64>,

    /// Comma-separated command script, replacing the stock demo
    #[arg(long, value_name = "SCRIPT")]
    pub script: Option<String>,

    /// Emit the final frame as JSON instead of text
    #[arg(short, long)]
    pub json: bool,

    /// Skip the welcome screen
    #[arg(long)]
    pub no_welcome: bool,
}

/// Final frame output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Grid dimensions (columns, rows)
    #[serde(default = "default_dimensions")]
    pub dimensions: (u16, u16),

    /// Busy-wait spins between commands
    #[serde(default = "default_delay_spins")]
    pub delay_spins: u64,

    /// Command script to run
    #[serde(default = "default_script")]
    pub script: Vec<String>,

    /// Final frame output format
    #[serde(default)]
    pub output: OutputFormat,

    /// Draw the welcome screen before the shell starts
    #[serde(default = "default_true")]
    pub welcome: bool,
}

fn default_dimensions() -> (u16, u16) {
    (80, 25)
}
fn default_delay_spins() -> u64 {
    SpinDelay::DEMO_SPINS
}
fn default_script() -> Vec<String> {
    DEMO_SCRIPT.iter().map(|token| token.to_string()).collect()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dimensions: default_dimensions(),
            delay_spins: default_delay_spins(),
            script: default_script(),
            output: OutputFormat::Text,
            welcome: true,
        }
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl Config {
    /// Load configuration with full precedence:
    /// CLI args > environment variables > config file > defaults
    pub fn load_with_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        let config_path = args.config.clone().or_else(Self::default_config_path);
        if let Some(path) = &config_path {
            if path.exists() {
                config = Self::load_from_file(path)?;
            } else if args.config.is_some() {
                return Err(ConfigError::Read {
                    path: path.clone(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "no such file",
                    ),
                });
            }
        }

        config.apply_env_vars();
        config.apply_cli_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })
    }

    /// The default configuration file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tofu").join("config.toml"))
    }

    fn apply_env_vars(&mut self) {
        if let Ok(val) = env::var("TOFU_COLS") {
            if let Ok(cols) = val.parse() {
                self.dimensions.0 = cols;
            }
        }
        if let Ok(val) = env::var("TOFU_ROWS") {
            if let Ok(rows) = val.parse() {
                self.dimensions.1 = rows;
            }
        }
        if let Ok(val) = env::var("TOFU_DELAY") {
            if let Ok(spins) = val.parse() {
                self.delay_spins = spins;
            }
        }
    }

    fn apply_cli_args(&mut self, args: &CliArgs) {
        if let Some(cols) = args.cols {
            self.dimensions.0 = cols;
        }
        if let Some(rows) = args.rows {
            self.dimensions.1 = rows;
        }
        if let Some(spins) = args.delay {
            self.delay_spins = spins;
        }
        if let Some(script) = &args.script {
            self.script = script.split(',').map(|token| token.to_string()).collect();
        }
        if args.json {
            self.output = OutputFormat::Json;
        }
        if args.no_welcome {
            self.welcome = false;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions.0 < 40 {
            return Err(ConfigError::Invalid {
                field: "dimensions",
                message: "grid must be at least 40 columns wide".to_string(),
            });
        }
        if self.dimensions.1 < 10 {
            return Err(ConfigError::Invalid {
                field: "dimensions",
                message: "grid must be at least 10 rows tall".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dimensions, (80, 25));
        assert_eq!(config.script, DEMO_SCRIPT);
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.welcome);
    }

    #[test]
    fn test_validation_rejects_tiny_grids() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.dimensions = (10, 25);
        assert!(config.validate().is_err());

        config.dimensions = (80, 3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
            dimensions = [100, 30]
            delay_spins = 0
            script = ["info", "colors"]
            output = "json"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dimensions, (100, 30));
        assert_eq!(config.delay_spins, 0);
        assert_eq!(config.script, vec!["info", "colors"]);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.welcome);
    }
}
