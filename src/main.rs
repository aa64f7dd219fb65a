//! Currency exchange-rate fetcher - main entry point
//!
//! This binary provides two subcommands:
//! - json: fetch a timeseries and write (or print) the reshaped JSON
//! - csv: fetch a timeseries and write both JSON and CSV files

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

use commands::FetchArgs;

#[derive(Parser, Debug)]
#[command(name = "currency-rates")]
#[command(about = "Fetch historical currency exchange rates and export them to JSON/CSV", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch rates and write them as JSON (prints to stdout without OUTPUT)
    Json {
        #[command(flatten)]
        args: FetchArgs,

        /// Output file path (.json appended when no extension is given)
        output: Option<String>,
    },

    /// Fetch rates and write both <OUTPUT>.json and <OUTPUT>.csv
    Csv {
        #[command(flatten)]
        args: FetchArgs,

        /// Output path stem (extensions are appended automatically)
        output: String,
    },
}

fn setup_logging(verbose: bool) {
    // Filter out noisy external crates
    let level = if verbose { "debug" } else { "info" };
    let filter_str = format!(
        "{},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn,h2=warn",
        level
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Json { args, output } => commands::json::run(args, output),
        Commands::Csv { args, output } => commands::csv::run(args, output),
    }
}
