//! Auxiliary fixture catalogue.
//!
//! Handlers, images and other assets that integration tests load at synth time
//! but that do not follow the `integ.*` naming convention. The table is
//! maintained by hand and never checked against the filesystem; stale entries
//! surface at the copy step.

use super::discover::discover_integ_paths;
use crate::Result;
use crate::models::{ExtraPath, IntegPath};
use std::path::Path;

/// Extra paths used by integration tests, relative to the package root.
pub const EXTRA_PATHS: &[ExtraPath] = &[
    ExtraPath::bare("aws-cloudfront/test/test-origin.ts"),
    ExtraPath::with_copy("aws-eks/test/integ-tests-kubernetes-version.ts", false),
    ExtraPath::bare("aws-eks/test/hello-k8s.ts"),
    ExtraPath::bare("aws-eks/test/pinger/function"),
    ExtraPath::bare("aws-eks/test/pinger/pinger.ts"),
    ExtraPath::bare("aws-eks/test/bucket-pinger/function"),
    ExtraPath::bare("aws-eks/test/bucket-pinger/bucket-pinger.ts"),
    ExtraPath::bare("aws-lambda-event-sources/test/test-function.ts"),
    ExtraPath::bare(
        "custom-resources/test/provider-framework/integration-test-fixtures/s3-assert-handler",
    ),
    ExtraPath::bare(
        "custom-resources/test/provider-framework/integration-test-fixtures/s3-file-handler",
    ),
    ExtraPath::bare(
        "custom-resources/test/provider-framework/integration-test-fixtures/s3-assert.ts",
    ),
    ExtraPath::bare(
        "custom-resources/test/provider-framework/integration-test-fixtures/s3-file.ts",
    ),
    ExtraPath::bare("pipelines/test/testhelpers/assets"),
    ExtraPath::bare("pipelines/test/testhelpers/compliance.ts"),
    ExtraPath::bare("pipelines/test/testhelpers/index.ts"),
    ExtraPath::bare("pipelines/test/testhelpers/legacy-pipeline.ts"),
    ExtraPath::bare("pipelines/test/testhelpers/modern-pipeline.ts"),
    ExtraPath::bare("pipelines/test/testhelpers/matchers.ts"),
    ExtraPath::bare("pipelines/test/testhelpers/test-app.ts"),
    ExtraPath::with_copy("aws-apigateway/test/sample-definition.yaml", true),
    ExtraPath::with_copy("aws-apigateway/test/integ.cors.handler", true),
    ExtraPath::with_copy("aws-appsync/test/appsync.none.graphql", true),
    ExtraPath::with_copy("aws-appsync/test/appsync.test.graphql", true),
    ExtraPath::with_copy("aws-appsync/test/appsync.lambda.graphql", true),
    ExtraPath::with_copy("aws-appsync/test/appsync.auth.graphql", true),
    ExtraPath::with_copy("aws-appsync/test/integ.graphql-iam.graphql", true),
    ExtraPath::with_copy("aws-appsync/test/appsync.js-resolver.graphql", true),
    ExtraPath::with_copy("aws-appsync/test/integ.graphql.graphql", true),
    ExtraPath::with_copy("aws-appsync/test/verify/lambda-tutorial", true),
    ExtraPath::with_copy(
        "aws-cloudformation/test/core-custom-resource-provider-fixture/index.js",
        true,
    ),
    ExtraPath::with_copy("aws-cloudformation/test/asset-directory-fixture", true),
    ExtraPath::with_copy("aws-codebuild/test/build-spec-asset.yml", true),
    ExtraPath::with_copy("aws-codebuild/test/demo-image", true),
    ExtraPath::with_copy("aws-codecommit/test/asset-test.zip", true),
    ExtraPath::with_copy("aws-codecommit/test/asset-test", true),
    ExtraPath::with_copy("aws-codedeploy/test/lambda/handler", true),
    ExtraPath::with_copy("aws-codepipeline-actions/test/cloudformation/test-artifact", true),
    ExtraPath::with_copy("aws-codepipeline-actions/test/assets/nodejs.zip", true),
    ExtraPath::with_copy("aws-ec2/test/import-certificates-handler/index.js", true),
    ExtraPath::with_copy("aws-ecr-assets/test/demo-image", true),
    ExtraPath::with_copy("aws-ecr-assets/test/demo-tarball-hello-world/hello-world.tar", true),
    ExtraPath::with_copy("aws-ecs/test/ec2/firelens.conf", true),
    ExtraPath::with_copy("aws-ecs/test/demo-envfiles", true),
    ExtraPath::with_copy("aws-ecs-patterns/test/sqs-reader", true),
    ExtraPath::with_copy("aws-ecs-patterns/test/demo-image", true),
    ExtraPath::with_copy("aws-eks/test/sdk-call-integ-test-docker-app/app", true),
    ExtraPath::with_copy("aws-eks/test/test-chart", true),
    ExtraPath::with_copy("aws-events-targets/test/ecs/eventhandler-image", true),
    ExtraPath::with_copy("aws-iam/test/saml-metadata-document.xml", true),
    ExtraPath::with_copy("aws-lambda/test/my-lambda-handler", true),
    ExtraPath::with_copy("aws-lambda/test/handler.zip", true),
    ExtraPath::with_copy("aws-lambda/test/python-lambda-handler", true),
    ExtraPath::with_copy("aws-lambda/test/docker-lambda-handler", true),
    ExtraPath::with_copy("aws-lambda/test/docker-arm64-handler", true),
    ExtraPath::with_copy("aws-lambda/test/layer-code", true),
    ExtraPath::with_copy("aws-lambda-nodejs/test/integ-handlers", true),
    ExtraPath::with_copy("aws-rds/test/snapshot-handler", true),
    ExtraPath::with_copy("aws-s3/test/put-objects-handler/index.js", true),
    ExtraPath::with_copy("aws-s3-assets/test/alpine-markdown", true),
    ExtraPath::with_copy("aws-s3-assets/test/file-asset.txt", true),
    ExtraPath::with_copy("aws-s3-assets/test/sample-asset-directory", true),
    ExtraPath::with_copy("aws-s3-deployment/test/my-website-second", true),
    ExtraPath::with_copy(
        "aws-secretsmanager/test/integ.secret-name-parsed.handler/index.js",
        true,
    ),
    ExtraPath::with_copy("aws-servicecatalog/test/assets", true),
    ExtraPath::with_copy("aws-stepfunctions-tasks/test/batch/batchjob-image", true),
    ExtraPath::with_copy("aws-stepfunctions-tasks/test/ecs/eventhandler-image", true),
    ExtraPath::with_copy("aws-stepfunctions-tasks/test/glue/my-glue-script/job.py", true),
    ExtraPath::with_copy("aws-stepfunctions-tasks/test/lambda/my-lambda-handler", true),
    ExtraPath::with_copy("lambda-layer-kubectl/test/lambda-handler", true),
];

/// Resolve the catalogue against `root`, keeping table order.
#[must_use]
pub fn extra_paths(root: &Path) -> Vec<IntegPath> {
    EXTRA_PATHS.iter().map(|extra| extra.resolve(root)).collect()
}

/// Append the catalogue to an already discovered set.
#[must_use]
pub fn merge_extra_paths(discovered: Vec<IntegPath>, root: &Path) -> Vec<IntegPath> {
    let mut merged = discovered;
    merged.extend(extra_paths(root));
    merged
}

/// Discover every integration path under `root` and append the catalogue.
pub fn find_integ_files<P: AsRef<Path>>(root: P) -> Result<Vec<IntegPath>> {
    let root = root.as_ref();
    let discovered = discover_integ_paths(root)?;
    log::info!(
        "Discovered {} integration paths under {}",
        discovered.len(),
        root.display()
    );
    Ok(merge_extra_paths(discovered, root))
}
