use std::path::PathBuf;

use anyhow::Result;
use blobport::ExportConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "blobport")]
#[command(about = "Export a local directory tree to an Azure Blob Storage container")]
#[command(version)]
struct Cli {
    #[arg(long, short = 'c', help = "Path to the JSON config file")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ExportConfig::load(&cli.config)?;
    blobport::run_export(&config).await?;

    Ok(())
}
