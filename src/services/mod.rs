//! Core services for discovery, the fixture catalogue, and import rewriting

pub mod catalogue;
pub mod discover;
pub mod drivers;
pub mod rewrite;
