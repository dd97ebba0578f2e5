use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod extract;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat session
    Chat {
        /// Load a PDF as the reference document before the first turn
        #[arg(long)]
        pdf: Option<PathBuf>,
    },
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Extract the plain text of a PDF and print it
    Extract {
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Chat { pdf }) => {
            chat::run(pdf).await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::Extract { file }) => {
            extract::run(&file)?;
        }
        None => {}
    }

    Ok(())
}
