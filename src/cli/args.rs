use clap::{Parser, Subcommand};

use libinit::config::GO_PACKAGE_ENV;
use libinit::OperationMode;

/// libinit - initialization API for a Go package port
#[derive(Parser)]
#[command(name = "libinit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the welcome banner
    Banner {
        /// Go package this crate ports
        #[arg(long, env = GO_PACKAGE_ENV)]
        go_package: Option<String>,
    },
    /// Run an initializer with a message
    Init {
        /// Message passed to the initializer
        message: String,

        /// Use the synchronous Go-style entry point
        #[arg(long)]
        go_style: bool,

        /// Operation mode label reported with the result
        #[arg(long, default_value = "async", value_parser = parse_mode)]
        mode: OperationMode,

        /// Log the message through the library; `--enable-logging=false`
        /// turns it off (overrides LIBINIT_ENABLE_LOGGING)
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        enable_logging: Option<bool>,

        /// Timeout in milliseconds (overrides LIBINIT_TIMEOUT_MS)
        #[arg(long)]
        timeout: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List valid operation modes
    Modes,
}

fn parse_mode(value: &str) -> Result<OperationMode, String> {
    value.parse::<OperationMode>().map_err(|e| e.to_string())
}
