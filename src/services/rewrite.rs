//! Import specifier rewriting for the consolidated package layout.

use crate::{Error, Result};
use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;
use std::sync::OnceLock;

/// Name of the consolidated package.
pub const CONSOLIDATED_PACKAGE: &str = "aws-cdk-lib";

/// npm scope the alpha packages are published under.
pub const ALPHA_SCOPE: &str = "@aws-cdk";

/// Sub-packages that stay separately published as `<scope>/<name>-alpha`.
pub const ALPHA_PACKAGES: [&str; 4] = [
    "integ-tests",
    "aws-apigatewayv2-integrations",
    "aws-batch",
    "aws-apigatewayv2",
];

/// Specifiers containing this are re-exported from the package root.
pub const CORE_MARKER: &str = "core";

/// Source directory inside each sub-package.
pub const SOURCE_DIR: &str = "lib";

/// Accepted range of `..` segments between a file and the old monorepo root.
pub const MIN_RELATIVE_DEPTH: usize = 2;
pub const MAX_RELATIVE_DEPTH: usize = 256;

fn import_re() -> &'static Regex {
    static IMPORT_RE: OnceLock<Regex> = OnceLock::new();
    IMPORT_RE.get_or_init(|| Regex::new(r#"from ['"](.*)['"]"#).expect("valid regex"))
}

/// Locate the quoted specifier of a `from "..."` clause.
///
/// The span runs to the last quote on the line. Empty specifiers are ignored.
#[must_use]
pub fn import_specifier(line: &str) -> Option<(Range<usize>, &str)> {
    let capture = import_re().captures(line)?.get(1)?;
    if capture.as_str().is_empty() {
        return None;
    }
    Some((capture.range(), capture.as_str()))
}

/// Last `/`-separated segment of a specifier.
#[must_use]
pub fn library_name(specifier: &str) -> &str {
    specifier.rsplit('/').next().unwrap_or(specifier)
}

/// `@aws-cdk/<library>-alpha` when `library` is on the alpha allow-list.
#[must_use]
pub fn alpha_package(library: &str) -> Option<String> {
    ALPHA_PACKAGES
        .contains(&library)
        .then(|| format!("{ALPHA_SCOPE}/{library}-alpha"))
}

/// Rewrites specifiers found in files of one sub-package at a fixed depth.
#[derive(Debug, Clone)]
pub struct ImportRewriter {
    module: String,
    self_prefix: String,
    sibling_prefix: String,
    // `.` in the prefix matches any character, so the sub-path is found
    // wherever the pattern first matches, not only right after the prefix.
    sub_path_re: Regex,
}

impl ImportRewriter {
    /// `relative_depth` is the number of `..` segments from the file to the old
    /// monorepo root, between [`MIN_RELATIVE_DEPTH`] and [`MAX_RELATIVE_DEPTH`].
    /// With a single segment the sibling prefix would be empty and match every
    /// specifier.
    pub fn new(module: impl Into<String>, relative_depth: usize) -> Result<Self> {
        if !(MIN_RELATIVE_DEPTH..=MAX_RELATIVE_DEPTH).contains(&relative_depth) {
            return Err(Error::InvalidInput(format!(
                "relative depth must be between {MIN_RELATIVE_DEPTH} and \
                 {MAX_RELATIVE_DEPTH}, got {relative_depth}"
            )));
        }

        let mut self_segments = vec![".."; relative_depth - 1];
        self_segments.push(SOURCE_DIR);
        let self_prefix = self_segments.join("/");

        let sub_path_re = Regex::new(&format!("{self_prefix}/(.+)"))
            .map_err(|e| Error::InvalidInput(format!("bad import prefix {self_prefix}: {e}")))?;

        Ok(Self {
            module: module.into(),
            self_prefix,
            sibling_prefix: vec![".."; relative_depth].join("/"),
            sub_path_re,
        })
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Prefix of imports pointing into the sub-package's own sources.
    #[must_use]
    pub fn self_prefix(&self) -> &str {
        &self.self_prefix
    }

    /// Prefix of imports pointing at the monorepo root.
    #[must_use]
    pub fn sibling_prefix(&self) -> &str {
        &self.sibling_prefix
    }

    /// Compute the specifier that is valid inside the consolidated package.
    #[must_use]
    pub fn rewrite(&self, specifier: &str) -> String {
        if specifier.starts_with(self.self_prefix.as_str()) {
            let sub_path = self
                .sub_path_re
                .captures(specifier)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str());
            let mut rewritten = format!("{CONSOLIDATED_PACKAGE}/{}", self.module);
            if specifier != self.self_prefix {
                rewritten.push_str("/lib");
            }
            if let Some(sub_path) = sub_path {
                rewritten.push('/');
                rewritten.push_str(sub_path);
            }
            return rewritten;
        }

        if let Some(rest) = specifier.strip_prefix(self.sibling_prefix.as_str()) {
            if let Some(alpha) = alpha_package(library_name(specifier)) {
                return alpha;
            }
            if specifier.contains(CORE_MARKER) {
                return CONSOLIDATED_PACKAGE.to_string();
            }
            return format!("{CONSOLIDATED_PACKAGE}{rest}");
        }

        specifier.to_string()
    }

    /// Rewrite the import specifier on `line`, if it has one.
    #[must_use]
    pub fn rewrite_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match import_specifier(line) {
            Some((span, specifier)) => {
                let rewritten = self.rewrite(specifier);
                log::debug!("{specifier} -> {rewritten}");
                Cow::Owned(replace_span(line, span, &rewritten))
            }
            None => Cow::Borrowed(line),
        }
    }
}

/// Rewrite only imports of alpha packages, leaving every other line untouched.
#[must_use]
pub fn rewrite_alpha_import(line: &str) -> Cow<'_, str> {
    let Some((span, specifier)) = import_specifier(line) else {
        return Cow::Borrowed(line);
    };
    match alpha_package(library_name(specifier)) {
        Some(alpha) => Cow::Owned(replace_span(line, span, &alpha)),
        None => Cow::Borrowed(line),
    }
}

/// Compute the consolidated-package specifier for `import_path`.
pub fn rewrite_path(
    import_path: &str,
    current_module: &str,
    relative_depth: usize,
) -> Result<String> {
    Ok(ImportRewriter::new(current_module, relative_depth)?.rewrite(import_path))
}

fn replace_span(line: &str, span: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(line.len() + replacement.len());
    out.push_str(&line[..span.start]);
    out.push_str(replacement);
    out.push_str(&line[span.end..]);
    out
}
