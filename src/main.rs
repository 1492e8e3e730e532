//! Command-line entry point for the prompt palette generator.
//!
//! The binary is thin glue around the library: it resolves the active
//! color scheme, loads the optional wal cache, renders the template, and
//! writes the result with a backup of the previous output.
//!
//! # Environment Variables
//!
//! - `DEBUG`: When set, enables debug output to stderr showing the
//!   resolved scheme name, the derived palette, and the output path.

use anyhow::{Context, Result};
use clap::Parser;

use kolorship::logs::debug;
use kolorship::output::{expand_tilde, read_template, write_with_backup};
use kolorship::scheme::{self, SchemeFile};
use kolorship::wal::WalCache;
use kolorship::{render, restart};

/// Generate a Starship configuration based on the active KDE color scheme.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Output file for the generated Starship configuration
    #[arg(short, long)]
    output: String,

    /// Template file for the Starship configuration
    #[arg(short, long)]
    template: String,

    /// Accent color in hex format (e.g. #ff0000); defaults to the system accent color
    #[arg(short = 'c', long)]
    accent_color: Option<String>,

    /// Restart the terminal after the configuration is written
    #[arg(short, long)]
    restart: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scheme_name =
        scheme::active_scheme_name().context("Could not determine the active KDE color scheme")?;
    debug(&format!("scheme={scheme_name}"));

    let scheme_path = scheme::scheme_file_path(&scheme_name)
        .with_context(|| format!("Could not find color scheme file: {scheme_name}"))?;
    let scheme = SchemeFile::load(&scheme_path)?;

    let system_accent = if args.accent_color.is_none() {
        scheme::system_accent_color()
    } else {
        None
    };
    let wal = WalCache::load()?;

    let template_path = expand_tilde(&args.template);
    let template = read_template(&template_path)?;

    let config = render(
        &scheme,
        &template,
        args.accent_color.as_deref(),
        system_accent.as_deref(),
        wal.as_ref(),
    )?;

    let output_path = expand_tilde(&args.output);
    write_with_backup(&output_path, &config)?;
    debug(&format!("wrote {}", output_path.display()));

    if args.restart {
        restart::refresh_terminal();
    }

    Ok(())
}
