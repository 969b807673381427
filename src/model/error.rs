//! Error types for the whirl application.
//!
//! A small hierarchical taxonomy built on `thiserror`. Library code
//! signals "no valid position" with `Option` rather than an error (the
//! controller degrades to no-ops on zero items or unmeasured viewports);
//! the error types here cover the shell's fallible edges: configuration,
//! strip-definition input, logging setup, and the terminal itself.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level application error for the demo binary.
///
/// All domain-specific error types convert via `From`, so the binary's
/// setup path composes with `?`. Every variant is fatal: without a
/// config, a strip definition, or a working terminal there is nothing
/// to run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Strip definition input failed to load.
    #[error("Failed to load strip definition: {0}")]
    Strip(#[from] StripError),

    /// Tracing subscriber initialization failed.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading a strip definition.
///
/// A strip definition is a JSON array of items (label, intrinsic width,
/// merge span) read from a file path or piped stdin. Unlike the
/// controller's runtime no-op policy, a malformed definition is a fatal
/// construction error surfaced to the caller and never retried.
#[derive(Debug, Error)]
pub enum StripError {
    /// The strip definition file does not exist at the given path.
    #[error("Strip definition not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided and no demo count was requested.
    #[error("No input source: provide a file path, pipe JSON to stdin, or use --count")]
    NoInput,

    /// The definition exists but is not valid JSON for a list of items.
    #[error("Invalid strip definition{}: {message}", source_label(.path))]
    Invalid {
        /// Path of the malformed definition, if read from a file.
        path: Option<PathBuf>,
        /// The JSON parser error message.
        message: String,
    },

    /// Generic I/O error reading the definition.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn source_label(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" at {}", path.display()),
        None => " on stdin".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn strip_error_file_not_found_display() {
        let err = StripError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("/tmp/missing.json"));
    }

    #[test]
    fn strip_error_invalid_names_the_file() {
        let err = StripError::Invalid {
            path: Some(PathBuf::from("/tmp/strip.json")),
            message: "expected value at line 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/strip.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn strip_error_invalid_names_stdin_without_path() {
        let err = StripError::Invalid {
            path: None,
            message: "trailing characters".to_string(),
        };
        assert!(err.to_string().contains("stdin"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }

    #[test]
    fn app_error_from_strip_error() {
        let app_err: AppError = StripError::NoInput.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to load strip definition"));
        assert!(msg.contains("No input source"));
    }
}
