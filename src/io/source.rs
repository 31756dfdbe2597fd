//! Newline-delimited source file access
//!
//! Files are split on `\n` and re-joined with `\n`, so a file whose lines are
//! not modified is written back byte-identically, trailing newline and `\r`
//! characters included.

use crate::{Error, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Read a UTF-8 source file as a list of lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(contents.split('\n').map(str::to_owned).collect())
}

/// Replace the whole file with the joined lines.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let contents = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Normalize path separators so path patterns match on every platform
#[cfg(windows)]
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    let path_str = path.to_string_lossy();

    if path_str.contains('\\') {
        path_str.replace('\\', "/")
    } else {
        match path_str {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => s,
        }
    }
}

#[cfg(not(windows))]
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    let path_str = path.to_string_lossy();

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
