use clap::Parser;
use firms_mapper::cli::{run, Cli};
use firms_mapper::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
