use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};

use mailgen_lib::ExportFormat;

pub fn banner() {
    println!();
    println!("{}", "=".repeat(60));
    println!("{:^60}", "Email Pattern Generator");
    println!("{}", "=".repeat(60));
}

/// Prompts until a non-empty (trimmed) line is entered.
pub fn nonempty(label: &str) -> Result<String> {
    loop {
        let value = read_line(label)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("A value is required.");
    }
}

/// Prints the format menu and maps the `1`/`2`/`3` choice. `None` means the
/// choice was invalid; the caller decides what to do about it.
pub fn format_menu() -> Result<Option<ExportFormat>> {
    println!();
    println!("Choose a file format to save the email patterns:");
    println!("1. Save as .txt");
    println!("2. Save as .json");
    println!("3. Save as .xml");
    let choice = read_line("Choose an option (1/2/3): ")?;
    Ok(ExportFormat::from_menu_choice(&choice))
}

fn read_line(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read stdin")?;
    if read == 0 {
        bail!("stdin closed while waiting for input");
    }
    Ok(line.trim().to_string())
}
