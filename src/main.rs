use anyhow::Result;
use clap::{Parser, Subcommand};
use gitsecure::commands::{AnalyzeCommand, Command, CommandContext};
use std::env;

#[derive(Parser)]
#[command(name = "gitsecure")]
#[command(about = "A cli tool to audit GitHub repository security compliance")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a GitHub repository for security compliance
    Analyze {
        /// The URL of the GitHub repository to analyze
        #[arg(long)]
        repourl: String,

        /// Create a GitHub issue with the analysis report
        #[arg(long)]
        create_issue: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            repourl,
            create_issue,
        } => {
            // The token check comes before any network call
            let token = env::var("GITHUB_TOKEN").map_err(|_| {
                anyhow::anyhow!(
                    "GITHUB_TOKEN not found in the environment. Set it before running gitsecure."
                )
            })?;

            let context = CommandContext { token };
            AnalyzeCommand {
                repourl,
                create_issue,
            }
            .execute(&context)
            .await?;
        }
    }

    Ok(())
}
