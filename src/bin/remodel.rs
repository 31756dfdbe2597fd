//! Integration test remodel CLI - Main binary entry point

use remodel::cli::args::{Command, parse_args};
use remodel::cli::output::{format_json, format_report, format_text};
use remodel::services::catalogue::find_integ_files;
use remodel::services::discover::discover_integ_paths;
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug remodel discover packages/aws-cdk-lib
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let quiet = cli_args.quiet;
    let result = match &cli_args.command {
        Command::Discover(discover_args) => handle_discover(discover_args),
        Command::RewriteInteg(rewrite_args) => handle_rewrite_integ(rewrite_args, quiet),
        Command::RewriteLibTests(lib_args) => handle_rewrite_lib_tests(lib_args, quiet),
        Command::AddTypesReference(ref_args) => handle_add_types_reference(ref_args, quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(match e {
            remodel::Error::InvalidInput(_) => 2,
            _ => 4,
        });
    }
}

fn handle_discover(args: &remodel::cli::args::DiscoverArgs) -> remodel::Result<()> {
    let paths = if args.discovered_only {
        discover_integ_paths(&args.root)?
    } else {
        find_integ_files(&args.root)?
    };

    if args.json {
        println!("{}", format_json(&paths));
    } else if !paths.is_empty() {
        println!("{}", format_text(&paths));
    }

    Ok(())
}

fn handle_rewrite_integ(
    args: &remodel::cli::args::RewriteIntegArgs,
    quiet: bool,
) -> remodel::Result<()> {
    let reports = remodel::rewrite_integ_tests(&args.files, args.depth)?;
    if !quiet {
        for report in &reports {
            eprintln!("{}", format_report(report));
        }
    }
    Ok(())
}

fn handle_rewrite_lib_tests(
    args: &remodel::cli::args::RewriteLibTestsArgs,
    quiet: bool,
) -> remodel::Result<()> {
    let reports = remodel::rewrite_cdk_lib_test_imports(&args.root)?;
    if !quiet {
        for report in &reports {
            eprintln!("{}", format_report(report));
        }
    }
    Ok(())
}

fn handle_add_types_reference(
    args: &remodel::cli::args::AddTypesReferenceArgs,
    quiet: bool,
) -> remodel::Result<()> {
    for file in &args.files {
        remodel::add_types_reference(file)?;
        if !quiet {
            eprintln!("Added types reference: {file}");
        }
    }
    Ok(())
}

fn print_help() {
    println!("Integration Test Remodel (remodel) - Move integ tests into aws-cdk-lib");
    println!();
    println!("USAGE:");
    println!("    remodel discover <ROOT> [OPTIONS]");
    println!("    remodel rewrite-integ <FILE>... --depth <N> [OPTIONS]");
    println!("    remodel rewrite-lib-tests <AWS_CDK_LIB_ROOT> [OPTIONS]");
    println!("    remodel add-types-reference <FILE>... [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    discover              List integ tests, snapshots and fixture paths under ROOT");
    println!("    rewrite-integ         Rewrite imports of staged integ tests for aws-cdk-lib");
    println!("    rewrite-lib-tests     Point alpha imports of aws-cdk-lib unit tests at");
    println!("                          the published -alpha packages");
    println!("    add-types-reference   Prepend the provider framework types reference");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!("    --quiet                    Suppress non-error output");
    println!();
    println!("DISCOVER OPTIONS:");
    println!("    --json                    Emit machine-readable output");
    println!("    --discovered-only         Skip the hand-maintained fixture catalogue");
    println!();
    println!("REWRITE-INTEG OPTIONS:");
    println!("    --depth <N>               '..' segments to the old monorepo root (2 to 256)");
    println!();
    println!("EXAMPLES:");
    println!("    remodel discover packages/@aws-cdk --json");
    println!("    remodel rewrite-integ --depth 2 \\");
    println!("        @aws-cdk-testing/framework-integ/test/aws-s3/test/integ.bucket.ts");
    println!("    remodel rewrite-lib-tests packages/aws-cdk-lib");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("remodel {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
