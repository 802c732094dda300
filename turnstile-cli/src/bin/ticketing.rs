use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::BufReader;
use turnstile_cli::{load_config, logging, ticketing};
use turnstile_store::JsonFileStore;

#[derive(Parser)]
#[command(name = "ticketing")]
#[command(about = "Collect guest details, price the ticket and record the sale")]
struct Cli {
    /// Ticket history file (overrides `store.path`)
    #[arg(long)]
    store: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.store) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format!("{:#}", e).red());
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.logging.filter);
    tracing::debug!("Ticket history at {}", config.store.path.display());

    let store = JsonFileStore::new(&config.store.path);
    let validity = chrono::Duration::hours(i64::from(config.tickets.validity_hours));

    let status = ticketing::run(
        BufReader::new(tokio::io::stdin()),
        &mut tokio::io::stdout(),
        &mut tokio::io::stderr(),
        &store,
        validity,
    )
    .await;

    match status {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("Terminal I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
