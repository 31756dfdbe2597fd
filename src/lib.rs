//! Integration Test Remodel Library
//!
//! This library supports the consolidation of many sub-packages into the single
//! `aws-cdk-lib` package: it discovers integration test files and their fixtures,
//! and rewrites their import specifiers so they resolve under the new layout.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::{ExtraPath, IntegPath, RewriteReport};
pub use services::catalogue::find_integ_files;
pub use services::discover::discover_integ_paths;
pub use services::drivers::{
    add_types_reference, rewrite_cdk_lib_test_imports, rewrite_integ_test_imports,
    rewrite_integ_tests,
};
pub use services::rewrite::{ImportRewriter, rewrite_path};

use std::path::{Path, PathBuf};
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    ModulePattern {
        path: String,
    },
    InvalidInput(String),
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "I/O error at {}: {source}", path.display()),
            Error::ModulePattern { path } => write!(f, "Can't parse module from path {path}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
