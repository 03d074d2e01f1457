use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod command;

use cli::{Cli, Commands};
use command::InitArgs;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Banner { go_package }) => {
            command::run_banner(go_package).await?;
        }
        Some(Commands::Init {
            message,
            go_style,
            mode,
            enable_logging,
            timeout,
            json,
        }) => {
            command::run_init(InitArgs {
                message,
                go_style,
                mode,
                enable_logging,
                timeout,
                json,
            })
            .await?;
        }
        Some(Commands::Modes) => {
            command::run_modes().await?;
        }
        None => {
            // No command specified, show help
            eprintln!("No command specified. Use --help for usage information.");
            eprintln!("Use 'libinit banner' to get started or 'libinit init <MESSAGE>' to run an initializer.");
        }
    }

    Ok(())
}
