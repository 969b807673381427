//! Strip definition input.
//!
//! The demo reads its item strip from a JSON array of objects
//! (`label`, optional `width`, optional `merge`), either from a file
//! path, from piped stdin, or generated on demand with `--count`.

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::model::{Item, StripError};

/// Load the item strip for the demo.
///
/// Precedence: an explicit file path wins, then piped stdin, then a
/// generated strip of `count` placeholder items. With none of the
/// three available there is nothing to show and loading fails.
pub fn load_strip(
    file: Option<PathBuf>,
    count: Option<usize>,
) -> Result<Vec<Item>, StripError> {
    if let Some(path) = file {
        return from_file(&path);
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut contents = String::new();
        stdin.lock().read_to_string(&mut contents)?;
        return parse(&contents, None);
    }

    match count {
        Some(count) => Ok(generate(count)),
        None => Err(StripError::NoInput),
    }
}

/// Read and parse a strip definition file.
pub fn from_file(path: &Path) -> Result<Vec<Item>, StripError> {
    if !path.exists() {
        return Err(StripError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    parse(&contents, Some(path.to_path_buf()))
}

fn parse(contents: &str, path: Option<PathBuf>) -> Result<Vec<Item>, StripError> {
    let items: Vec<Item> =
        serde_json::from_str(contents).map_err(|e| StripError::Invalid {
            path,
            message: e.to_string(),
        })?;
    info!(count = items.len(), "strip definition loaded");
    Ok(items)
}

/// Generate a placeholder strip of numbered items.
///
/// Widths vary in a short repeating pattern so auto-width mode has
/// something visible to work with.
pub fn generate(count: usize) -> Vec<Item> {
    const PATTERN: [f64; 4] = [80.0, 120.0, 100.0, 140.0];
    (0..count)
        .filter_map(|i| Item::new(format!("item {i}"), PATTERN[i % PATTERN.len()]).ok())
        .collect()
}
