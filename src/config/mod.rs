//! Configuration module for solidkit
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SOLIDKIT_*)
//! 3. `--config` file, else `./solidkit.toml`, else user config
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, ConfigWarning, EnvWarning, ResolvedConfig, LOCAL_CONFIG_FILE};
pub use types::{Config, LogLevel, LoggingConfig, OutputConfig, OutputFormat, MAX_PRECISION};
