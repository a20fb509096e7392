// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Locating and writing solution files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PlannerError;

/// `<dir>/<name>.in` is answered by `<dir>/<name>.out`.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("out")
}

/// Example instances are solved and checked but never overwritten with output.
pub fn is_example(input: &Path) -> bool {
    input
        .file_name()
        .map(|name| name.to_string_lossy().contains("example"))
        .unwrap_or(false)
}

/// All `.in` files of a level directory, sorted by name.
pub fn instance_files(dir: &Path) -> Result<Vec<PathBuf>, PlannerError> {
    if !dir.is_dir() {
        return Err(PlannerError::MissingLevelDir {
            path: dir.to_path_buf(),
        });
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|err| PlannerError::io(dir, err))? {
        let path = entry.map_err(|err| PlannerError::io(dir, err))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "in") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn write_solution(path: &Path, contents: &str) -> Result<(), PlannerError> {
    fs::write(path, contents).map_err(|err| PlannerError::io(path, err))
}
