use anyhow::{Context, Result};
use tracing::debug;

use libinit::go_style::InitializeLibraryWithOptions;
use libinit::{initialize_library_with, LibraryOptions, LibraryResult, OperationMode};

/// Arguments of the `init` subcommand
#[derive(Debug, Clone)]
pub struct InitArgs {
    pub message: String,
    pub go_style: bool,
    pub mode: OperationMode,
    pub enable_logging: Option<bool>,
    pub timeout: Option<u64>,
    pub json: bool,
}

/// Merge CLI flags over options loaded from the environment
fn resolve_options(args: &InitArgs, base: LibraryOptions) -> LibraryOptions {
    LibraryOptions {
        enable_logging: args.enable_logging.unwrap_or(base.enable_logging),
        timeout: args.timeout.unwrap_or(base.timeout),
    }
}

async fn execute(args: &InitArgs, options: &LibraryOptions) -> LibraryResult {
    let surface = if args.go_style {
        InitializeLibraryWithOptions(&args.message, *options);
        "go-style"
    } else {
        initialize_library_with(&args.message, options).await;
        "native"
    };

    LibraryResult::now(
        true,
        format!("initialized via {} API ({} mode)", surface, args.mode),
    )
}

pub async fn run_init(args: InitArgs) -> Result<()> {
    let env_options =
        LibraryOptions::from_env().context("Failed to load options from environment")?;
    let options = resolve_options(&args, env_options);
    debug!("Running init with {:?}", options);

    let result = execute(&args, &options).await;

    if args.json {
        let json =
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", json);
    } else {
        println!("✅ {}", result.data);
        println!("   Timestamp: {}", result.timestamp);
    }

    Ok(())
}
