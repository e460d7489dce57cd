//! xlsxroutes CLI - convert a route workbook to Markdown

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use xlsxroutes::{ConverterBuilder, IgnoreSheets, DEFAULT_IGNORE_SHEETS};

#[derive(Parser, Debug)]
#[command(
    name = "xlsxroutes",
    author,
    version,
    about = "Convert an Excel routes workbook to Markdown",
    long_about = "Reads every sheet of a routes workbook (LOCATION, ROUTE, NOTES columns), \
                  groups the routes by location and writes one Markdown table per location."
)]
struct Args {
    /// Path to input Excel file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output Markdown file
    #[arg(short, long)]
    output: PathBuf,

    /// Optional comma-separated list of sheet names to ignore
    /// (Default is: Key, Gardening, Holotactics)
    #[arg(long, value_name = "NAMES")]
    ignore_sheets: Option<String>,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// An empty `--ignore-sheets` value falls back to the defaults.
    fn ignore_sheets(&self) -> IgnoreSheets {
        match self.ignore_sheets.as_deref() {
            Some(list) if !list.is_empty() => IgnoreSheets::from_list(list),
            _ => IgnoreSheets::default(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .format_timestamp(None)
    .init();

    let ignore_sheets = args.ignore_sheets();
    log::debug!(
        "Ignoring sheets: {:?} (defaults: {:?})",
        ignore_sheets.iter().collect::<Vec<_>>(),
        DEFAULT_IGNORE_SHEETS
    );

    let converter = ConverterBuilder::new()
        .with_ignore_sheets(ignore_sheets.iter())
        .build()
        .context("Invalid converter configuration")?;

    converter
        .convert(&args.input, &args.output)
        .with_context(|| {
            format!(
                "Failed to convert '{}' to '{}'",
                args.input.display(),
                args.output.display()
            )
        })?;

    Ok(())
}
