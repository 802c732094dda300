use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;
use turnstile_cli::{load_config, logging, verify};
use turnstile_order::TicketVerifier;
use turnstile_store::JsonFileStore;

#[derive(Parser)]
#[command(name = "verify-ticket")]
#[command(about = "Look up an issued ticket and list its guests")]
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

    let verifier = TicketVerifier::new(Arc::new(JsonFileStore::new(&config.store.path)));

    let status = verify::run(
        BufReader::new(tokio::io::stdin()),
        &mut tokio::io::stdout(),
        &mut tokio::io::stderr(),
        &verifier,
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
