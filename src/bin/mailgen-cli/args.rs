use std::path::PathBuf;

use clap::Parser;

/// Generates candidate e-mail addresses for a person and exports them.
#[derive(Parser)]
#[command(name = "mailgen-cli")]
pub struct Cli {
    /// first name (prompted for when omitted)
    #[arg(long)]
    pub first: Option<String>,

    /// last name (prompted for when omitted)
    #[arg(long)]
    pub last: Option<String>,

    /// domain the addresses belong to (prompted for when omitted)
    #[arg(long)]
    pub domain: Option<String>,

    /// format: text|json|xml (interactive menu when omitted)
    #[arg(long)]
    pub format: Option<String>,

    /// write to this path instead of the format's default filename
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// verbose logs (RUST_LOG takes precedence when set)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
