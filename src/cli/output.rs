//! Output formatting for CLI

use crate::io::source::normalize_path;
use crate::models::{IntegPath, RewriteReport};

/// Render integration paths as a JSON array of `{path, copy}` objects.
#[must_use]
pub fn format_json(paths: &[IntegPath]) -> String {
    serde_json::to_string_pretty(paths).unwrap_or_else(|_| "[]".to_string())
}

/// Render integration paths one per line: `copy` or `ref`, a tab, then the path.
#[must_use]
pub fn format_text(paths: &[IntegPath]) -> String {
    paths
        .iter()
        .map(|p| {
            let mode = if p.copy { "copy" } else { "ref" };
            format!("{mode}\t{}", normalize_path(&p.path))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of a rewritten file.
#[must_use]
pub fn format_report(report: &RewriteReport) -> String {
    format!(
        "{} [{}]: {} of {} lines rewritten",
        report.path, report.module, report.changed, report.lines
    )
}
