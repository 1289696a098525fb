//! Locating and reading puzzle input files

use crate::error::InputError;
use crate::puzzle::PuzzleId;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the input file inside each puzzle directory
pub const DEFAULT_FILENAME: &str = "input.txt";

/// Resolves default input paths under a base directory
///
/// Directory structure: `{base_dir}/day_DD/input.txt`, or
/// `{base_dir}/day_DD_partN/input.txt` when a part has its own input.
pub struct InputLocator {
    base_dir: PathBuf,
}

impl InputLocator {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Default path for a puzzle, preferring a part-specific directory
    pub fn default_path(&self, puzzle: &PuzzleId) -> PathBuf {
        let part_specific = self.base_dir.join(puzzle.label()).join(DEFAULT_FILENAME);
        if puzzle.part > 1 && part_specific.exists() {
            return part_specific;
        }
        self.base_dir.join(puzzle.day_dir()).join(DEFAULT_FILENAME)
    }
}

/// Read a whole input file
pub fn read_input(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::Missing(path.to_path_buf()),
        _ => InputError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}
