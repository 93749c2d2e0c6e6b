use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mailgen_lib::{ExportFormat, Identity, export_patterns, generate_patterns};

#[path = "mailgen-cli/args.rs"]
mod args;
#[path = "mailgen-cli/prompt.rs"]
mod prompt;

use args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let interactive = cli.first.is_none() || cli.last.is_none() || cli.domain.is_none();
    if interactive {
        prompt::banner();
        println!("Enter the following details:");
    }

    let first = field_or_prompt(cli.first.as_deref(), "First Name: ")?;
    let last = field_or_prompt(cli.last.as_deref(), "Last Name: ")?;
    let domain = field_or_prompt(cli.domain.as_deref(), "Domain Name (e.g., example.com): ")?;

    let identity = Identity::new(&first, &last, &domain)?;
    let patterns = generate_patterns(&identity);
    tracing::debug!("candidate set holds {} addresses", patterns.len());

    let format = match cli.format.as_deref() {
        Some(name) => match ExportFormat::from_name(name) {
            Some(format) => format,
            None => bail!("unknown --format '{name}', use: text|json|xml"),
        },
        None => match prompt::format_menu()? {
            Some(format) => format,
            None => {
                println!("Invalid choice. No file saved.");
                return Ok(());
            }
        },
    };

    let path = cli
        .out
        .unwrap_or_else(|| PathBuf::from(format.file_name()));
    export_patterns(&patterns, format, &path)
        .with_context(|| format!("export to {}", path.display()))?;
    println!("Email patterns saved to {}", path.display());

    Ok(())
}

fn field_or_prompt(value: Option<&str>, label: &str) -> Result<String> {
    match value {
        Some(given) => Ok(given.to_string()),
        None => prompt::nonempty(label),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("mailgen_lib=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mailgen_lib=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}
