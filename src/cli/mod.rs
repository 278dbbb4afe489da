use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod ask;
pub mod chat;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Ask the tutor a single question without starting a server
    Ask {
        question: String,

        /// Answer from the demo template instead of calling the model
        #[arg(long, action, default_value = "false")]
        demo: bool,
    },
    /// Start an interactive tutoring session against a running server
    Chat {
        /// Base URL of the tutor server
        #[arg(long, default_value = "http://127.0.0.1:2222")]
        url: String,
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
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Ask { question, demo }) => {
            ask::run(question, demo).await?;
        }
        Some(Command::Chat { url }) => {
            chat::run(url).await?;
        }
        None => {}
    }

    Ok(())
}
