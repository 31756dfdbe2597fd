//! Integration path discovery.
//!
//! Walks a package tree and classifies each entry by name:
//!
//! - `integ.*.snapshot` directories are emitted whole (`copy = false`) and not
//!   descended into.
//! - `integ.*.ts` files are emitted, copied only when they end in `.lit.ts`
//!   since those are also embedded in READMEs.
//! - Every other directory is recursed into; every other file is dropped.
//!
//! Sibling entries are classified in parallel on the rayon pool. Result order
//! follows directory listing order and is not sorted.

use crate::models::IntegPath;
use crate::{Error, Result};
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn snapshot_dir_re() -> &'static Regex {
    static SNAPSHOT_RE: OnceLock<Regex> = OnceLock::new();
    SNAPSHOT_RE.get_or_init(|| Regex::new(r"^integ\..*\.snapshot$").expect("valid regex"))
}

fn integ_file_re() -> &'static Regex {
    static INTEG_RE: OnceLock<Regex> = OnceLock::new();
    INTEG_RE.get_or_init(|| Regex::new(r"^integ\..*\.ts$").expect("valid regex"))
}

/// Classification of a single directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Opaque snapshot fixture directory.
    Snapshot,
    /// Integration test source; `copy` is set for literate (`.lit.ts`) tests.
    IntegTest { copy: bool },
    /// Plain directory to descend into.
    Descend,
    Ignored,
}

/// Classify an entry by its file name and whether it is a directory.
#[must_use]
pub fn classify(name: &str, is_dir: bool) -> EntryKind {
    if is_dir {
        if snapshot_dir_re().is_match(name) {
            EntryKind::Snapshot
        } else {
            EntryKind::Descend
        }
    } else if integ_file_re().is_match(name) {
        EntryKind::IntegTest {
            copy: name.ends_with(".lit.ts"),
        }
    } else {
        EntryKind::Ignored
    }
}

/// Recursively discover integration test files and snapshot directories under `dir`.
///
/// Any listing or metadata failure aborts the whole walk.
pub fn discover_integ_paths<P: AsRef<Path>>(dir: P) -> Result<Vec<IntegPath>> {
    let dir = dir.as_ref();

    let children = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()).map_err(|e| Error::io(dir, e)))
        .collect::<Result<Vec<PathBuf>>>()?;

    let nested = children
        .into_par_iter()
        .map(|child| discover_entry(&child))
        .collect::<Result<Vec<Vec<IntegPath>>>>()?;

    Ok(nested.into_iter().flatten().collect())
}

fn discover_entry(path: &Path) -> Result<Vec<IntegPath>> {
    // Follows symlinks, like `stat`; a vanished entry is fatal.
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match classify(&name, metadata.is_dir()) {
        EntryKind::Snapshot => {
            log::debug!("Snapshot directory: {}", path.display());
            Ok(vec![IntegPath::new(path, false)])
        }
        EntryKind::IntegTest { copy } => {
            log::debug!("Integration test: {} (copy: {copy})", path.display());
            Ok(vec![IntegPath::new(path, copy)])
        }
        EntryKind::Descend => discover_integ_paths(path),
        EntryKind::Ignored => {
            log::trace!("Skipping {}", path.display());
            Ok(Vec::new())
        }
    }
}
