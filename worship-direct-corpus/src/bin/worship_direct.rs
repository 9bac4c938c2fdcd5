use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use worship_direct_corpus::{BIBLE_DIR_ENV, CorpusConfig, Library, Verse, VerseRef};

/// A CLI tool to look up verses in the nested worship-direct corpora.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the <version>_nested.json files
    #[arg(short, long, env = BIBLE_DIR_ENV, default_value = "bible")]
    bible_dir: PathBuf,

    /// Versions to load (repeatable)
    #[arg(long = "version-name", default_values = ["kjv", "asv"])]
    versions: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a single verse
    Verse {
        /// Version, e.g. kjv
        translation: String,
        /// Book name; lower case is accepted for single-word books
        book: String,
        chapter: String,
        verse: String,
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
    /// Look up a verse from a /bible/<version>/<book>/<chapter>/<verse> route
    Route {
        path: String,
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
    /// List the books of a version with their chapter counts
    Books {
        /// Version, e.g. kjv
        translation: String,
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {s}")),
        }
    }
}

#[derive(Serialize)]
struct BookSummary<'a> {
    book: &'a str,
    chapters: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = CorpusConfig::new(&args.bible_dir).with_versions(args.versions);
    let library = Library::load(&config)?;

    match args.command {
        Commands::Verse {
            translation,
            book,
            chapter,
            verse,
            format,
        } => {
            let verse_ref = VerseRef::new(translation, book, chapter, verse)?;
            print_verse(&library.lookup(&verse_ref)?, &format)
        }
        Commands::Route { path, format } => {
            let verse_ref = VerseRef::from_route(&path)?;
            print_verse(&library.lookup(&verse_ref)?, &format)
        }
        Commands::Books {
            translation,
            format,
        } => {
            let corpus = library.corpus(&translation)?;
            let books: Vec<BookSummary> = corpus
                .books()
                .map(|(book, chapters)| BookSummary {
                    book,
                    chapters: chapters.len(),
                })
                .collect();

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&books)?),
                OutputFormat::Text => {
                    println!("{} books in {}:", books.len(), translation.to_uppercase());
                    for summary in books {
                        println!("  {} ({} chapters)", summary.book, summary.chapters);
                    }
                }
            }
            Ok(())
        }
    }
}

fn print_verse(verse: &Verse, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(verse)?),
        OutputFormat::Text => {
            println!("{}", verse.text);
            println!(
                "{} {}:{} ({})",
                verse.book,
                verse.chapter,
                verse.verse,
                verse.version.to_uppercase()
            );
        }
    }
    Ok(())
}
