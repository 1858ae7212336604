use cinedb::shell::Action;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cinedb", version)]
#[command(about = "Curate the cinema dataset: add people and projects, sync with the bucket", long_about = None)]
pub struct Cli {
    /// Run this action directly instead of showing the menu
    #[arg(value_enum)]
    pub action: Option<Action>,

    /// Config file (default: OS config dir, or $CINEDB_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Local dataset document
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Remote bucket URI
    #[arg(short, long, value_name = "URI")]
    pub bucket: Option<String>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
