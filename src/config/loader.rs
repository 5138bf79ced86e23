//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SolidError, SolidResult};

use super::types::{Config, LogLevel, OutputFormat};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "solidkit.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

/// A `SOLIDKIT_*` variable whose value could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvWarning {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Configuration after files and environment have been applied
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: Config,
    /// File the config was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    pub env_warnings: Vec<EnvWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SolidResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content, recording unknown keys instead of rejecting them.
pub fn parse_with_warnings(content: &str, path: &Path) -> SolidResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SolidError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration in priority order:
/// 1. `explicit` path (must exist)
/// 2. `./solidkit.toml`
/// 3. `<user config dir>/solidkit/config.toml`
/// 4. Built-in defaults
///
/// Environment overrides are applied on top of whichever was found. Nothing
/// is logged here; callers report the warnings once logging is installed.
pub fn resolve(explicit: Option<&Path>) -> SolidResult<ResolvedConfig> {
    let (config, source, warnings) = match find_config_file(explicit) {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            (config, Some(path), warnings)
        }
        None => (Config::default(), None, Vec::new()),
    };

    let (config, env_warnings) = with_env_overrides(config);
    Ok(ResolvedConfig {
        config,
        source,
        warnings,
        env_warnings,
    })
}

fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    [Some(PathBuf::from(LOCAL_CONFIG_FILE)), user_config_path()]
        .into_iter()
        .flatten()
        .find(|path| path.is_file())
}

/// Apply environment variable overrides (SOLIDKIT_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<EnvWarning>) {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable source.
///
/// Invalid values leave the setting untouched and come back as warnings.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> (Config, Vec<EnvWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();
    let mut reject = |var: &'static str, value: String, expected: &'static str| {
        warnings.push(EnvWarning {
            var,
            value,
            expected,
        })
    };

    if let Some(value) = lookup("SOLIDKIT_PRECISION") {
        match value.trim().parse::<usize>() {
            Ok(precision) => config.output.precision = precision,
            Err(_) => reject("SOLIDKIT_PRECISION", value, "a whole number"),
        }
    }

    if let Some(value) = lookup("SOLIDKIT_FORMAT") {
        match OutputFormat::parse(&value) {
            Some(format) => config.output.format = format,
            None => reject("SOLIDKIT_FORMAT", value, "text or json"),
        }
    }

    if let Some(value) = lookup("SOLIDKIT_LOG") {
        match LogLevel::parse(&value) {
            Some(level) => config.logging.level = level,
            None => reject("SOLIDKIT_LOG", value, "error, warn, info, debug or trace"),
        }
    }

    (config, warnings)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("solidkit").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}
