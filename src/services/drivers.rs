//! In-place file rewrite drivers.
//!
//! Every driver reads a whole file, transforms it line by line in memory and
//! overwrites the original. No backups are kept. Batches run on the rayon pool;
//! files are distinct so writes need no coordination, and there is no ordering
//! guarantee between them.

use super::rewrite::{ImportRewriter, rewrite_alpha_import};
use crate::io::source::{normalize_path, read_lines, write_lines};
use crate::models::RewriteReport;
use crate::{Error, Result};
use rayon::prelude::*;
use regex::Regex;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Unit tests inside `aws-cdk-lib` that import alpha packages.
pub const CDK_LIB_ALPHA_TESTS: [&str; 5] = [
    "aws-stepfunctions-tasks/test/batch/submit-job.test.ts",
    "aws-stepfunctions-tasks/test/batch/run-batch-job.test.ts",
    "aws-stepfunctions-tasks/test/apigateway/call-http-api.test.ts",
    "aws-route53-targets/test/apigatewayv2-target.test.ts",
    "aws-events-targets/test/batch/batch.test.ts",
];

/// Triple-slash directive for the provider framework types, which are not
/// resolved automatically from the integration test staging area.
pub const TYPES_REFERENCE: &str = concat!(
    r#"/// <reference path="../../../../../../../../../node_modules/"#,
    r#"aws-cdk-lib/custom-resources/lib/provider-framework/types.d.ts" />"#,
);

fn cdk_lib_test_re() -> &'static Regex {
    static CDK_LIB_TEST_RE: OnceLock<Regex> = OnceLock::new();
    CDK_LIB_TEST_RE.get_or_init(|| Regex::new(r"aws-cdk-lib/(.+?)/test").expect("valid regex"))
}

fn integ_test_re() -> &'static Regex {
    static INTEG_TEST_RE: OnceLock<Regex> = OnceLock::new();
    INTEG_TEST_RE.get_or_init(|| {
        Regex::new(r"@aws-cdk-testing/framework-integ/test/(.+?)/test").expect("valid regex")
    })
}

fn capture_module(re: &Regex, path: &Path) -> Result<String> {
    let normalized = normalize_path(path);
    let module = re
        .captures(&normalized)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    module.ok_or(Error::ModulePattern { path: normalized })
}

/// Owning module of a test file under an `aws-cdk-lib` tree.
pub fn cdk_lib_module(path: &Path) -> Result<String> {
    capture_module(cdk_lib_test_re(), path)
}

/// Owning module of a test file in the integration test staging area.
pub fn integ_module(path: &Path) -> Result<String> {
    capture_module(integ_test_re(), path)
}

fn rewrite_file<F>(path: &Path, module: String, rewrite_line: F) -> Result<RewriteReport>
where
    F: Fn(&str) -> Cow<'_, str>,
{
    let lines = read_lines(path)?;
    let mut changed = 0;
    let rewritten: Vec<Cow<'_, str>> = lines
        .iter()
        .map(|line| {
            let new_line = rewrite_line(line.as_str());
            if new_line != line.as_str() {
                changed += 1;
            }
            new_line
        })
        .collect();

    write_lines(path, &rewritten)?;

    Ok(RewriteReport {
        path: normalize_path(path),
        module,
        lines: lines.len(),
        changed,
    })
}

/// Point alpha-package imports of the known `aws-cdk-lib` unit tests at the
/// published `-alpha` packages.
///
/// Every file's module is parsed before anything is written, so a stale entry
/// fails the run without touching the tree.
pub fn rewrite_cdk_lib_test_imports<P: AsRef<Path>>(root: P) -> Result<Vec<RewriteReport>> {
    let root = root.as_ref();
    let targets = CDK_LIB_ALPHA_TESTS
        .iter()
        .map(|file| {
            let path = root.join(file);
            cdk_lib_module(&path).map(|module| (path, module))
        })
        .collect::<Result<Vec<(PathBuf, String)>>>()?;

    targets
        .into_par_iter()
        .map(|(path, module)| rewrite_file(&path, module, rewrite_alpha_import))
        .collect()
}

fn integ_rewriter(path: &Path, relative_depth: usize) -> Result<(String, ImportRewriter)> {
    let module = integ_module(path)?;
    let rewriter = ImportRewriter::new(module.clone(), relative_depth)?;
    Ok((module, rewriter))
}

/// Rewrite every import of an integration test file for the consolidated package.
pub fn rewrite_integ_test_imports<P: AsRef<Path>>(
    file_path: P,
    relative_depth: usize,
) -> Result<RewriteReport> {
    let file_path = file_path.as_ref();
    let (module, rewriter) = integ_rewriter(file_path, relative_depth)?;
    rewrite_file(file_path, module, |line| rewriter.rewrite_line(line))
}

/// Rewrite a batch of integration test files in parallel.
///
/// All module names are resolved first; a path outside the staging area fails
/// the batch before any file is written.
pub fn rewrite_integ_tests<P: AsRef<Path> + Sync>(
    files: &[P],
    relative_depth: usize,
) -> Result<Vec<RewriteReport>> {
    let rewriters = files
        .iter()
        .map(|file| {
            let file = file.as_ref();
            integ_rewriter(file, relative_depth).map(|(module, rewriter)| (file, module, rewriter))
        })
        .collect::<Result<Vec<(&Path, String, ImportRewriter)>>>()?;

    rewriters
        .into_par_iter()
        .map(|(file, module, rewriter)| {
            rewrite_file(file, module, |line| rewriter.rewrite_line(line))
        })
        .collect()
}

/// Prepend the provider framework types reference to a file.
pub fn add_types_reference<P: AsRef<Path>>(file_path: P) -> Result<()> {
    let file_path = file_path.as_ref();
    let lines = read_lines(file_path)?;

    let mut contents = Vec::with_capacity(lines.len() + 1);
    contents.push(TYPES_REFERENCE);
    contents.extend(lines.iter().map(String::as_str));

    write_lines(file_path, &contents)
}
