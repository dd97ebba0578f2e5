use anyhow::Result;
use colloquy::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
