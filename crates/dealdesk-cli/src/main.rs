mod extract;
mod roster;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dealdesk")]
#[command(about = "Draft structured brand deals from creator messages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract a deal draft from a single message and print it as JSON
    Extract {
        /// The raw creator message
        message: String,

        /// Extra brand name to match against (repeatable)
        #[arg(long = "brand")]
        brands: Vec<String>,

        /// Brand roster file (defaults to DEALDESK_BRANDS_PATH)
        #[arg(long)]
        brands_file: Option<PathBuf>,

        /// Ignore the roster file and match only `--brand` values
        #[arg(long)]
        no_roster: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Extract deal drafts from newline-delimited JSON requests
    Batch {
        /// Input file; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Brand roster file (defaults to DEALDESK_BRANDS_PATH)
        #[arg(long)]
        brands_file: Option<PathBuf>,
    },
    /// List the brand roster
    Brands {
        /// Brand roster file (defaults to DEALDESK_BRANDS_PATH)
        #[arg(long)]
        brands_file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = dealdesk_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Extract {
            message,
            brands,
            brands_file,
            no_roster,
            pretty,
        } => {
            let roster = if no_roster {
                dealdesk_core::BrandRoster::default()
            } else {
                roster::load_for_run(&config, brands_file.as_deref())?
            };
            extract::run_extract(&config, &roster, &message, &brands, pretty)
        }
        Commands::Batch { input, brands_file } => {
            let roster = roster::load_for_run(&config, brands_file.as_deref())?;
            extract::run_batch_command(&config, &roster, input.as_deref())
        }
        Commands::Brands { brands_file } => {
            let roster = roster::load_for_run(&config, brands_file.as_deref())?;
            roster::print_roster(&roster);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
