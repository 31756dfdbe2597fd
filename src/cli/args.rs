//! CLI argument parsing

use crate::services::rewrite::{MAX_RELATIVE_DEPTH, MIN_RELATIVE_DEPTH};

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub enum Command {
    Discover(DiscoverArgs),
    RewriteInteg(RewriteIntegArgs),
    RewriteLibTests(RewriteLibTestsArgs),
    AddTypesReference(AddTypesReferenceArgs),
}

#[derive(Debug, Clone, Default)]
pub struct DiscoverArgs {
    pub root: String,
    pub json: bool,
    pub discovered_only: bool,
}

#[derive(Debug, Clone)]
pub struct RewriteIntegArgs {
    pub files: Vec<String>,
    pub depth: usize,
}

#[derive(Debug, Clone)]
pub struct RewriteLibTestsArgs {
    pub root: String,
}

#[derive(Debug, Clone)]
pub struct AddTypesReferenceArgs {
    pub files: Vec<String>,
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    // --quiet is accepted by every command
    let quiet = args[2..].iter().any(|a| a == "--quiet");
    let rest: Vec<String> = args[2..]
        .iter()
        .filter(|a| *a != "--quiet")
        .cloned()
        .collect();

    let command = match args[1].as_str() {
        "discover" => Command::Discover(parse_discover_args(&rest)?),
        "rewrite-integ" => Command::RewriteInteg(parse_rewrite_integ_args(&rest)?),
        "rewrite-lib-tests" => Command::RewriteLibTests(parse_rewrite_lib_tests_args(&rest)?),
        "add-types-reference" => {
            let files = positional_only(&rest)?;
            if files.is_empty() {
                return Err("Missing required argument: FILE".to_string());
            }
            Command::AddTypesReference(AddTypesReferenceArgs { files })
        }
        _ => return Err(format!("Unknown command: {}", args[1])),
    };

    Ok(CliArgs { command, quiet })
}

fn parse_discover_args(args: &[String]) -> Result<DiscoverArgs, String> {
    let mut discover_args = DiscoverArgs::default();

    for arg in args {
        match arg.as_str() {
            "--json" => discover_args.json = true,
            "--discovered-only" => discover_args.discovered_only = true,
            arg if !arg.starts_with("--") => {
                if discover_args.root.is_empty() {
                    discover_args.root = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {arg}")),
        }
    }

    if discover_args.root.is_empty() {
        return Err("Missing required argument: ROOT".to_string());
    }

    Ok(discover_args)
}

fn parse_rewrite_integ_args(args: &[String]) -> Result<RewriteIntegArgs, String> {
    let mut files = Vec::new();
    let mut depth = None;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--depth" => {
                i += 1;
                if i >= args.len() {
                    return Err("--depth requires a value".to_string());
                }
                let value: usize = args[i]
                    .parse()
                    .map_err(|_| "--depth must be a positive integer".to_string())?;
                if !(MIN_RELATIVE_DEPTH..=MAX_RELATIVE_DEPTH).contains(&value) {
                    return Err(format!(
                        "--depth must be between {MIN_RELATIVE_DEPTH} and {MAX_RELATIVE_DEPTH}"
                    ));
                }
                depth = Some(value);
            }
            arg if !arg.starts_with("--") => files.push(arg.to_string()),
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if files.is_empty() {
        return Err("Missing required argument: FILE".to_string());
    }

    let depth = depth.ok_or_else(|| "Missing required option: --depth".to_string())?;

    Ok(RewriteIntegArgs { files, depth })
}

fn parse_rewrite_lib_tests_args(args: &[String]) -> Result<RewriteLibTestsArgs, String> {
    let mut positional = positional_only(args)?;
    match positional.len() {
        0 => Err("Missing required argument: AWS_CDK_LIB_ROOT".to_string()),
        1 => Ok(RewriteLibTestsArgs {
            root: positional.remove(0),
        }),
        _ => Err(format!("Unexpected argument: {}", positional[1])),
    }
}

fn positional_only(args: &[String]) -> Result<Vec<String>, String> {
    args.iter()
        .map(|arg| {
            if arg.starts_with("--") {
                Err(format!("Unknown option: {arg}"))
            } else {
                Ok(arg.clone())
            }
        })
        .collect()
}
