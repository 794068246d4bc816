use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "peoplemask")]
#[command(about = "Remove duplicate entries from a contact document", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Person document as returned by the contacts API (JSON)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Comma-joined person fields to work on, e.g. `emailAddresses,phoneNumbers`
    #[arg(short, long)]
    pub fields: Option<String>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long)]
    pub log_level: Option<String>,

    /// Absolute directory for log files; logging stays off without it
    #[arg(long)]
    pub log_dir: Option<String>,

    /// Print the cleanup report instead of the updated document
    #[arg(long)]
    pub dry_run: bool,
}
