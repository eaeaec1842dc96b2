//! Plain-text save files: one decimal integer per line, traversed row by
//! row with `grid[col][row]` on each line, so line `n` is column `n % W`,
//! row `n / W`. Empty cells are written as the sentinel value and parsed
//! back to empty.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use macroquad::logging::warn;
use thiserror::Error;

use crate::core::{CellColor, ColorGrid};

pub const FILE_SUFFIX: &str = ".txt";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: not a cell value: {text:?}")]
    Malformed { line: usize, text: String },
    #[error("line {line}: value {value} outside color range")]
    OutOfRange { line: usize, value: u32 },
}

/// Append the fixed suffix to the user-entered base name. No sanitization,
/// no overwrite prompt.
pub fn save_path(base_name: &str) -> PathBuf {
    PathBuf::from(format!("{base_name}{FILE_SUFFIX}"))
}

pub fn save_matrix(path: &Path, grid: &ColorGrid) -> Result<(), PersistError> {
    let mut out = BufWriter::new(File::create(path)?);
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            writeln!(out, "{}", grid.get(col, row).to_packed())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Load a save file over `grid`. The whole file is parsed before anything is
/// applied, so a bad line leaves the matrix untouched. A short file only
/// overwrites the cells it has lines for; surplus lines past the matrix
/// capacity are dropped with a warning rather than wrapped around.
pub fn load_matrix_into(path: &Path, grid: &mut ColorGrid) -> Result<(), PersistError> {
    let reader = BufReader::new(File::open(path)?);

    let mut values = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        let raw: u32 = text
            .parse()
            .map_err(|_| PersistError::Malformed { line: n, text: text.to_string() })?;
        let cell = CellColor::from_packed(raw)
            .ok_or(PersistError::OutOfRange { line: n, value: raw })?;
        values.push(cell);
    }

    if values.len() > grid.len() {
        warn!(
            "{}: {} lines but only {} cells, ignoring the rest",
            path.display(),
            values.len(),
            grid.len()
        );
        values.truncate(grid.len());
    }

    for (n, cell) in values.into_iter().enumerate() {
        grid.set_linear(n, cell);
    }
    Ok(())
}
