mod keywords;
mod logger;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::info;
use syntagma_chunker::Chunker;
use syntagma_doc::Document;

#[derive(Parser)]
#[command(author, version, about = "Inspects dependency-parsed CONLL output")]
struct Cli {
    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every sentence as a token table
    Show {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Split every sentence into role-labelled chunks
    Chunks {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Count keyword candidates, most frequent first
    Keywords {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Only print the N most frequent
        #[arg(short = 'n', long, value_name = "N")]
        top: Option<usize>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn load(path: &Path) -> anyhow::Result<Document> {
    let input = fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
    let document =
        syntagma_parser::parse_str(&input).with_context(|| format!("failed to parse {:?}", path))?;
    info!("read {} sentences from {:?}", document.len(), path);
    Ok(document)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    match cli.command {
        Command::Show { input, format } => {
            let document = load(&input)?;
            match format {
                Format::Text => println!("{}", document),
                Format::Json => println!("{}", serde_json::to_string_pretty(&document)?),
            }
        }
        Command::Chunks { input, format } => {
            let mut document = load(&input)?;
            let count = Chunker::new()
                .chunk_document(&mut document)
                .with_context(|| format!("failed to chunk {:?}", input))?;
            info!("{} chunks", count);

            match format {
                Format::Text => {
                    for sentence in &document {
                        println!("{}", report::chunk_line(sentence));
                    }
                }
                Format::Json => {
                    let reports: Vec<_> = document.iter().map(report::SentenceReport::new).collect();
                    println!("{}", serde_json::to_string_pretty(&reports)?);
                }
            }
        }
        Command::Keywords { input, top } => {
            let document = load(&input)?;
            let counts = keywords::extract(&document);
            for (word, count) in counts.iter().take(top.unwrap_or(usize::MAX)) {
                println!("{}\t{}", count, word);
            }
        }
    }

    Ok(())
}
