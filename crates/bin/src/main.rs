use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use zamanix_account::{InMemoryStorage, SessionStore, Storage, SystemClock};

mod cli;
mod commands;

use cli::Cli;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("zamanix_account=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, zamanix_account::Error> {
    // Load or create the state file
    let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::load_from_file(&cli.file)?);
    let store = SessionStore::open(storage.clone(), Arc::new(SystemClock))?;

    let code = commands::dispatch(&cli.command, &store)?;

    // Only the in-memory backing knows how to persist itself to a file
    if let Some(in_memory) = storage.as_any().downcast_ref::<InMemoryStorage>() {
        in_memory.save_to_file(&cli.file)?;
    }
    Ok(code)
}
