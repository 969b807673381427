//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

use super::{HalfTurnBias, Options, ResponsiveOverrides, Settings};

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, disappearing file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are
/// used. Corresponds to `~/.config/whirl/config.toml`. Breakpoint keys
/// in `[responsive]` are viewport widths in pixels.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Items shown per view.
    #[serde(default)]
    pub items: Option<usize>,

    /// Seamless circular wraparound.
    #[serde(default, rename = "loop")]
    pub looping: Option<bool>,

    /// Center the current item.
    #[serde(default)]
    pub center: Option<bool>,

    /// Rewind instead of looping through clones.
    #[serde(default)]
    pub rewind: Option<bool>,

    /// Gap between items in pixels.
    #[serde(default)]
    pub margin: Option<f64>,

    /// Stage padding in pixels.
    #[serde(default)]
    pub stage_padding: Option<f64>,

    /// Honor per-item merge spans.
    #[serde(default)]
    pub merge: Option<bool>,

    /// Size items by measured widths.
    #[serde(default)]
    pub auto_width: Option<bool>,

    /// Right-to-left direction.
    #[serde(default)]
    pub rtl: Option<bool>,

    /// Per-index-unit animation duration in milliseconds.
    #[serde(default)]
    pub smart_speed: Option<u64>,

    /// Duration override for drag-release animations.
    #[serde(default)]
    pub drag_end_speed: Option<u64>,

    /// Tie-break at exactly half-strip loop distances.
    #[serde(default)]
    pub half_turn_bias: Option<HalfTurnBias>,

    /// Responsive breakpoint overrides, keyed by viewport width.
    ///
    /// TOML table keys are strings; they are parsed to pixel widths
    /// during merging and unparseable keys are skipped.
    #[serde(default)]
    pub responsive: Option<BTreeMap<String, ResponsiveOverrides>>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Controller options derived from the file and overrides.
    pub options: Options,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            options: Options::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/whirl/whirl.log` on Unix-like systems, or
/// the platform equivalent elsewhere. Falls back to the current
/// directory when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("whirl").join("whirl.log")
    } else {
        PathBuf::from("whirl.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/whirl/config.toml` on Unix, the platform
/// equivalent elsewhere, or `None` if no config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("whirl").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults). Returns `Err` if the file exists but cannot be read or
/// parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `WHIRL_CONFIG` environment variable
/// 3. Default path `~/.config/whirl/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("WHIRL_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise
/// use the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();

    let Some(config) = config_file else {
        return resolved;
    };

    let base = &mut resolved.options.base;
    let defaults = Settings::default();
    base.items = config.items.unwrap_or(defaults.items);
    base.looping = config.looping.unwrap_or(defaults.looping);
    base.center = config.center.unwrap_or(defaults.center);
    base.rewind = config.rewind.unwrap_or(defaults.rewind);
    base.margin = config.margin.unwrap_or(defaults.margin);
    base.stage_padding = config.stage_padding.unwrap_or(defaults.stage_padding);
    base.merge = config.merge.unwrap_or(defaults.merge);
    base.auto_width = config.auto_width.unwrap_or(defaults.auto_width);
    base.rtl = config.rtl.unwrap_or(defaults.rtl);
    base.smart_speed = config.smart_speed.unwrap_or(defaults.smart_speed);
    base.drag_end_speed = config.drag_end_speed.or(defaults.drag_end_speed);
    base.half_turn_bias = config.half_turn_bias.unwrap_or(defaults.half_turn_bias);

    if let Some(responsive) = config.responsive {
        resolved.options.responsive = responsive
            .into_iter()
            .filter_map(|(key, overrides)| Some((key.parse::<u32>().ok()?, overrides)))
            .collect();
    }
    if let Some(log_file_path) = config.log_file_path {
        resolved.log_file_path = log_file_path;
    }

    resolved
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `WHIRL_ITEMS`: override items-per-view (ignored if unparseable)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(items) = std::env::var("WHIRL_ITEMS") {
        if let Ok(items) = items.parse::<usize>() {
            config.options.base.items = items;
        }
    }

    config
}

/// CLI overrides applied on top of everything else.
///
/// Only flags the user explicitly set are carried as `Some`; the rest
/// leave the lower-precedence value untouched.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// `--items N`
    pub items: Option<usize>,
    /// `--loop`
    pub looping: Option<bool>,
    /// `--center`
    pub center: Option<bool>,
    /// `--rewind`
    pub rewind: Option<bool>,
    /// `--rtl`
    pub rtl: Option<bool>,
    /// `--margin PX`
    pub margin: Option<f64>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence:
/// Defaults → Config File → Env Vars → CLI Args (highest).
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    let base = &mut config.options.base;
    if let Some(items) = cli.items {
        base.items = items;
    }
    if let Some(looping) = cli.looping {
        base.looping = looping;
    }
    if let Some(center) = cli.center {
        base.center = center;
    }
    if let Some(rewind) = cli.rewind {
        base.rewind = rewind;
    }
    if let Some(rtl) = cli.rtl {
        base.rtl = rtl;
    }
    if let Some(margin) = cli.margin {
        base.margin = margin;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
