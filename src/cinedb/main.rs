use cinedb::api::CinedbApi;
use cinedb::config::CinedbConfig;
use cinedb::error::Result;
use cinedb::shell::{Prompter, Shell};
use cinedb::store::fs::FileStore;
use cinedb::sync::RemoteSync;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration resolved");

    let store = FileStore::new(config.data_file.clone());
    let remote = RemoteSync::new(
        config.bucket.clone(),
        config.remote_file.clone(),
        config.data_file.clone(),
        config.transfer_tool(),
    );
    let mut api = CinedbApi::new(store, remote);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(&mut api, Prompter::new(stdin.lock(), stdout.lock()));
    shell.run(cli.action)
}

fn load_config(cli: &Cli) -> Result<CinedbConfig> {
    let mut config = match CinedbConfig::locate(cli.config.clone()) {
        Some(path) => CinedbConfig::load(path)?,
        None => CinedbConfig::default(),
    };
    config.apply_env();
    config.apply_overrides(cli.data.clone(), cli.bucket.clone());
    Ok(config)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("CINEDB_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
