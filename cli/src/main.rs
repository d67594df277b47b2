//! Constella CLI — build constellations from the command line
//!
//! Runs the engine in-process against the bundled lexicon; no server
//! required.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use constella::builder::ConstellationBuilder;
use constella::tags::TagTables;
use constella::Constellation;
use constella_lexicon::Lexicon;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "constella", version, about = "Constella semantic constellation CLI")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a constellation from seed words
    Build {
        /// Seed words (also accepts one comma-separated string)
        words: Vec<String>,
    },
    /// Expand a single word
    Expand {
        /// The word to expand
        word: String,

        /// Maximum number of expansions
        #[arg(long, default_value_t = 10)]
        max: usize,
    },
    /// Show bundled lexicon statistics
    Status,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build { words } => run_build(&words, &cli.format),
        Commands::Expand { word, max } => run_expand(&word, max),
        Commands::Status => run_status(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn engine() -> Result<ConstellationBuilder, Box<dyn std::error::Error>> {
    let lexicon = Arc::new(Lexicon::bundled()?);
    let tables = Arc::new(TagTables::bundled()?);
    Ok(ConstellationBuilder::new(lexicon, tables))
}

fn run_build(words: &[String], format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let words: Vec<String> = words
        .iter()
        .flat_map(|w| w.split(','))
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();

    let constellation = engine()?.build(&words)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&constellation)?),
        OutputFormat::Table => print_tables(&constellation),
    }
    Ok(())
}

fn print_tables(constellation: &Constellation) {
    let mut nodes = Table::new();
    nodes
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["node", "categories"]);
    for node in &constellation.nodes {
        nodes.add_row(vec![node.id.to_string(), node.categories.join(", ")]);
    }
    println!("{nodes}");

    let mut links = Table::new();
    links
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["source", "target", "relation"]);
    for link in &constellation.links {
        links.add_row(vec![
            link.source.to_string(),
            link.target.to_string(),
            format!("{:?}", link.relation).to_lowercase(),
        ]);
    }
    println!("{links}");

    let mut tags = Table::new();
    tags.set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["tag set", "values"]);
    tags.add_row(vec!["careers".to_string(), constellation.careers.join(", ")]);
    tags.add_row(vec!["economy".to_string(), constellation.economy.join(", ")]);
    tags.add_row(vec!["trends".to_string(), constellation.trends.join(", ")]);
    println!("{tags}");
}

fn run_expand(word: &str, max: usize) -> Result<(), Box<dyn std::error::Error>> {
    let lexicon = Arc::new(Lexicon::bundled()?);
    let engine = constella::ExpansionEngine::new(lexicon);
    for expanded in engine.expand(&word.trim().to_lowercase(), max) {
        println!("{expanded}");
    }
    Ok(())
}

fn run_status() -> Result<(), Box<dyn std::error::Error>> {
    let lexicon = Lexicon::bundled()?;
    println!("constella v{}", constella::version());
    println!("lexicon: {} words, {} senses", lexicon.word_count(), lexicon.sense_count());
    Ok(())
}
