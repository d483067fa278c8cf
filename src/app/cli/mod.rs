//! CLI Adapter.

mod bump;
mod log;
mod sync;

use crate::domain::{AppError, VERSION_FILE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pit-maint")]
#[command(version)]
#[command(
    about = "Maintenance scripts for the pit course tooling",
    long_about = None
)]
struct Cli {
    /// Show debug diagnostics on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone or pull every student and team repository
    #[clap(visible_alias = "s")]
    Sync {
        /// TOML manifest replacing the built-in repository lists
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        /// Directory holding the working copies
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// Follow the pit log; `-s`/`-stop` deletes it, `-t`/`-truncate` starts it over
    #[clap(visible_alias = "l")]
    Log {
        /// Log file to manage instead of ~/.pit/log.txt
        #[arg(long)]
        file: Option<PathBuf>,
        /// Mode flag (`-s`, `-stop`, `-t`, `-truncate`); anything else just follows
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Increment the build number on the last line of the version file
    #[clap(visible_alias = "b")]
    Bump {
        /// Version file to update
        #[arg(short, long, default_value = VERSION_FILE)]
        file: PathBuf,
        /// Print the new build number without writing it
        #[arg(long)]
        dry_run: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Sync { manifest, dir } => sync::run_sync(manifest, dir),
        Commands::Log { file, args } => log::run_log(file, &args),
        Commands::Bump { file, dry_run } => bump::run_bump(file, dry_run),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when run from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
