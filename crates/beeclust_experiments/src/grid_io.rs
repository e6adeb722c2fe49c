//! Grid-file loading.
//!
//! Two formats are accepted. Files ending in `.json` hold a JSON array of
//! integer rows. Anything else is a text matrix: one row per line, cells
//! separated by whitespace, `#` starting a comment. Blank lines are skipped.

use std::path::{Path, PathBuf};

use beeclust_core::config::BeeClustConfig;
use beeclust_core::error::BuildError;
use beeclust_core::grid::Grid;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: `{token}` is not an integer cell code")]
    Parse { line: usize, token: String },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Parse the whitespace text format into raw cell codes.
pub fn parse_grid_text(text: &str) -> Result<Vec<Vec<i64>>, GridError> {
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let row = content
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| GridError::Parse {
                    line: index + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Read raw cell codes from `path` without building a grid.
pub fn load_codes(path: impl AsRef<Path>) -> Result<Vec<Vec<i64>>, GridError> {
    let path = path.as_ref();
    let text = read(path)?;
    if is_json(path) {
        Ok(serde_json::from_str(&text)?)
    } else {
        parse_grid_text(&text)
    }
}

/// Load and validate a grid file.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid, GridError> {
    let codes = load_codes(path)?;
    Ok(Grid::from_codes(&codes)?)
}

/// Load a JSON model configuration; missing fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<BeeClustConfig, GridError> {
    let text = read(path.as_ref())?;
    Ok(serde_json::from_str(&text)?)
}

fn read(path: &Path) -> Result<String, GridError> {
    std::fs::read_to_string(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
