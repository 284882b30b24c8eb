//! Questboard CLI
//!
//! Prints quest cards as text, using the same display rules as the
//! desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # List quests in the built-in sample catalog
//! questboard list
//!
//! # Show one quest card from a catalog file
//! questboard --catalog quests.json show early-minter
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use questboard_core::{
    check_completion, CardFooter, CompletionCheck, QuestCatalog, QuestId, RewardSummary,
};

/// Questboard - quests, rewards and completion
#[derive(Parser)]
#[command(name = "questboard")]
#[command(version = "0.1.0")]
#[command(about = "Questboard - quests, rewards and completion")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quest catalog JSON file (default: built-in sample quests)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every quest
    List,

    /// Show a quest card
    Show {
        /// Quest id
        id: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn open_catalog(path: Option<PathBuf>) -> Result<QuestCatalog> {
    match path {
        Some(path) => QuestCatalog::load(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Ok(QuestCatalog::sample()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let catalog = open_catalog(cli.catalog)?;

    match cli.command {
        Commands::List => {
            if catalog.quests().is_empty() {
                println!("No quests.");
            }
            for quest in catalog.quests() {
                println!("{}  {}  [{}]", quest.id, quest.title, quest.reward.method);
            }
        }

        Commands::Show { id } => {
            let id = QuestId::from(id);
            let quest = catalog
                .get(&id)
                .ok_or_else(|| anyhow::anyhow!("Quest not found: {}", id))?;

            let check = CompletionCheck::new();
            let completed = match check.begin() {
                Some(token) => check_completion(&catalog, &id, &token).await.is_completed(),
                None => false,
            };

            println!("{}", quest.title);
            println!("{}", quest.description);
            println!();
            for line in RewardSummary::for_reward(&quest.reward).lines() {
                println!("  {}", line);
            }
            println!();
            println!("{}", CardFooter::new(completed, quest.expires_on).text());
        }
    }

    Ok(())
}
