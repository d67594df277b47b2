use anyhow::Context;
use constella::builder::ConstellationBuilder;
use constella::http::{AppState, HttpServer, ServerConfig};
use constella::tags::TagTables;
use constella_lexicon::Lexicon;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Constella v{}", constella::version());
    println!("==========================================");
    println!();

    let lexicon = Arc::new(Lexicon::bundled().context("loading bundled lexicon")?);
    let tables = Arc::new(TagTables::bundled().context("loading tag tables")?);
    println!(
        "Lexicon loaded: {} words, {} senses",
        lexicon.word_count(),
        lexicon.sense_count()
    );

    let builder = Arc::new(ConstellationBuilder::new(
        Arc::clone(&lexicon),
        Arc::clone(&tables),
    ));

    let config = ServerConfig::from_env();
    println!("Starting constellation API on {}:{}...", config.host, config.port);
    println!("  POST /api/constellation  {{\"words\": \"cow, milk\"}}");
    println!("  GET  /api/status");
    println!();

    let server = HttpServer::new(AppState { builder, lexicon }, config);
    server.start().await.context("http server")?;

    Ok(())
}
