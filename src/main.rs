use clap::Parser;
use mediagrab::cli::Cli;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, replies to stdout
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("Starting mediagrab v{}", env!("CARGO_PKG_VERSION"));

    cli.run().await?;

    Ok(())
}
