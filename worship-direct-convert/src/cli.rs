//! Command-line front end shared by the converter binaries.

use crate::pipeline::{CorpusConverter, run_conversion};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use worship_direct_corpus::{BIBLE_DIR_ENV, CorpusConfig};

/// Convert a raw Bible JSON dump into the nested Book/Chapter/Verse format.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
pub struct ConvertArgs {
    /// Input JSON file [default: <BIBLE_DIR>/<version>.json]
    pub input: Option<PathBuf>,

    /// Output nested JSON file [default: <BIBLE_DIR>/<version>_nested.json]
    pub output: Option<PathBuf>,

    /// Directory used for the default input and output paths
    #[arg(long, env = BIBLE_DIR_ENV, default_value = "bible")]
    pub bible_dir: PathBuf,
}

impl ConvertArgs {
    /// Explicit paths, falling back to the `bible/` directory convention.
    pub fn resolve_paths(&self, converter: &dyn CorpusConverter) -> (PathBuf, PathBuf) {
        let config = CorpusConfig::new(&self.bible_dir);
        let input = self
            .input
            .clone()
            .unwrap_or_else(|| config.raw_path(converter.version()));
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| config.corpus_path(converter.version()));
        (input, output)
    }
}

/// Parse arguments, run `converter`, and exit with status 1 on failure.
///
/// Every message, including errors, goes to stdout.
pub fn main_for(name: &'static str, converter: &dyn CorpusConverter) {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let about = format!(
        "Convert the {} Bible JSON dump into the nested Book/Chapter/Verse format",
        converter.label()
    );
    let matches = ConvertArgs::command().name(name).about(about).get_matches();
    let args = ConvertArgs::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    let (input, output) = args.resolve_paths(converter);

    let title = format!("{} Bible JSON Converter", converter.label());
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!("Input:  {}", input.display());
    println!("Output: {}", output.display());
    println!();

    match run_conversion(converter, &input, &output) {
        Ok(report) => {
            if report.skipped > 0 || report.duplicates > 0 {
                println!(
                    "Skipped {} entries, replaced {} duplicates",
                    report.skipped, report.duplicates
                );
            }
            println!("{}", report.summary());
            println!();
            println!("Conversion completed successfully!");
            println!(
                "Nested {} Bible saved to: {}",
                converter.label(),
                output.display()
            );
        }
        Err(e) => {
            println!("Error: {e}");
            println!();
            println!("Conversion failed!");
            process::exit(1);
        }
    }
}
