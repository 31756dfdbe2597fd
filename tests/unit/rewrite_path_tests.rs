//! Unit tests for import specifier rewriting

use remodel::Error;
use remodel::services::rewrite::{
    ImportRewriter, MAX_RELATIVE_DEPTH, alpha_package, import_specifier, library_name,
    rewrite_alpha_import, rewrite_path,
};

#[test]
fn test_self_import_without_subpath() {
    let rewritten = rewrite_path("../../lib", "aws-s3", 3).unwrap();
    assert_eq!(rewritten, "aws-cdk-lib/aws-s3");
}

#[test]
fn test_self_import_with_subpath() {
    let rewritten = rewrite_path("../../lib/foo", "aws-s3", 3).unwrap();
    assert_eq!(rewritten, "aws-cdk-lib/aws-s3/lib/foo");
}

#[test]
fn test_self_import_trailing_slash_keeps_lib() {
    let rewritten = rewrite_path("../../lib/", "aws-s3", 3).unwrap();
    assert_eq!(rewritten, "aws-cdk-lib/aws-s3/lib");
}

#[test]
fn test_sub_path_found_past_a_lookalike_segment() {
    // "../libx" still starts with "../lib"; the sub-path comes from the later "../lib/"
    assert_eq!(
        rewrite_path("../libx/../lib/foo", "m", 2).unwrap(),
        "aws-cdk-lib/m/lib/foo"
    );
    assert_eq!(rewrite_path("../libx", "m", 2).unwrap(), "aws-cdk-lib/m/lib");
}

#[test]
fn test_alpha_sibling() {
    assert_eq!(
        rewrite_path("../../aws-batch", "aws-s3", 2).unwrap(),
        "@aws-cdk/aws-batch-alpha"
    );
    assert_eq!(
        rewrite_path("../../aws-apigatewayv2-integrations", "aws-s3", 2).unwrap(),
        "@aws-cdk/aws-apigatewayv2-integrations-alpha"
    );
}

#[test]
fn test_core_sibling_maps_to_package_root() {
    assert_eq!(rewrite_path("../../core", "aws-s3", 2).unwrap(), "aws-cdk-lib");
    assert_eq!(
        rewrite_path("../../core/lib/helpers-internal", "aws-s3", 2).unwrap(),
        "aws-cdk-lib"
    );
}

#[test]
fn test_generic_sibling() {
    assert_eq!(
        rewrite_path("../../aws-ec2", "aws-s3", 2).unwrap(),
        "aws-cdk-lib/aws-ec2"
    );
    assert_eq!(
        rewrite_path("../../aws-iam/lib/policy", "aws-s3", 2).unwrap(),
        "aws-cdk-lib/aws-iam/lib/policy"
    );
}

#[test]
fn test_alpha_check_precedes_core_check() {
    // "integ-tests" is alpha even though other segments could contain "core"
    assert_eq!(
        rewrite_path("../../core-things/integ-tests", "aws-s3", 2).unwrap(),
        "@aws-cdk/integ-tests-alpha"
    );
}

#[test]
fn test_external_specifier_unchanged() {
    assert_eq!(
        rewrite_path("some-external-package", "aws-s3", 2).unwrap(),
        "some-external-package"
    );
    assert_eq!(rewrite_path("./local", "aws-s3", 3).unwrap(), "./local");
}

#[test]
fn test_depth_below_two_rejected() {
    assert!(rewrite_path("../lib", "aws-s3", 1).is_err());
    assert!(ImportRewriter::new("aws-s3", 0).is_err());
}

#[test]
fn test_depth_above_limit_rejected() {
    let err = ImportRewriter::new("aws-s3", usize::MAX).expect_err("usize::MAX depth");
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(ImportRewriter::new("aws-s3", MAX_RELATIVE_DEPTH + 1).is_err());

    let deepest = ImportRewriter::new("aws-s3", MAX_RELATIVE_DEPTH).unwrap();
    assert_eq!(deepest.sibling_prefix().matches("..").count(), MAX_RELATIVE_DEPTH);
}

#[test]
fn test_prefixes() {
    let rewriter = ImportRewriter::new("aws-sns", 4).unwrap();
    assert_eq!(rewriter.self_prefix(), "../../../lib");
    assert_eq!(rewriter.sibling_prefix(), "../../../..");
    assert_eq!(rewriter.module(), "aws-sns");
}

#[test]
fn test_rewrite_line_replaces_only_specifier() {
    let rewriter = ImportRewriter::new("aws-s3", 2).unwrap();
    assert_eq!(
        rewriter.rewrite_line(r#"import { Vpc } from "../../aws-ec2";"#),
        r#"import { Vpc } from "aws-cdk-lib/aws-ec2";"#
    );
    assert_eq!(
        rewriter.rewrite_line("const app = new App();"),
        "const app = new App();"
    );
}

#[test]
fn test_empty_specifier_is_not_an_import() {
    assert!(import_specifier(r#"export * from "";"#).is_none());
    let rewriter = ImportRewriter::new("aws-s3", 2).unwrap();
    assert_eq!(rewriter.rewrite_line(r#"export * from "";"#), r#"export * from "";"#);
}

#[test]
fn test_import_specifier_span() {
    let line = "import * as s3 from '../lib';";
    let (span, specifier) = import_specifier(line).unwrap();
    assert_eq!(specifier, "../lib");
    assert_eq!(&line[span], "../lib");
}

#[test]
fn test_library_and_alpha_helpers() {
    assert_eq!(library_name("../../aws-batch"), "aws-batch");
    assert_eq!(library_name("constructs"), "constructs");
    assert_eq!(
        alpha_package("aws-apigatewayv2").as_deref(),
        Some("@aws-cdk/aws-apigatewayv2-alpha")
    );
    assert!(alpha_package("aws-s3").is_none());
}

#[test]
fn test_alpha_only_rewrite() {
    assert_eq!(
        rewrite_alpha_import("import * as batch from '../../../aws-batch';"),
        "import * as batch from '@aws-cdk/aws-batch-alpha';"
    );
    let untouched = "import * as ec2 from '../../../aws-ec2';";
    assert_eq!(rewrite_alpha_import(untouched), untouched);
}
