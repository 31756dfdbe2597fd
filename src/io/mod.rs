//! Filesystem input/output helpers

pub mod source;
