//! briefgen CLI — detect catalog items on a pasted planning grid and
//! generate the brief document.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "briefgen", version, about = "Planning-grid OCR to brief generator")]
struct Cli {
    /// Path to a TOML config file; built-in defaults are used when absent.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// OCR an image and print the matched catalog names.
    Detect {
        /// Image of the planning grid.
        image: PathBuf,
    },
    /// Fill a template and write the brief document.
    Generate {
        /// Period label, e.g. "Avril 2025".
        #[arg(long)]
        period: String,
        /// Document type identifier; unknown values fall back to the
        /// 5-panel leaflet.
        #[arg(long, default_value = "depliant_5volets")]
        doc_type: String,
        /// Item names to list in the brief.
        items: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Detect { image } => commands::detect(config, &image),
        Command::Generate {
            period,
            doc_type,
            items,
        } => commands::generate(config, period, doc_type, items),
    }
}
