use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use algoskel::cli;

#[derive(Parser)]
#[command(name = "algoskel", version)]
#[command(about = "Generate algorithm practice skeletons with an LLM", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a practice skeleton for one problem
    Generate {
        /// LeetCode problem id
        #[arg(long)]
        id: u32,

        /// Target language (see `algoskel list`). Default: from config, else go
        #[arg(short = 'l', long = "lang")]
        language: Option<String>,

        /// Skeleton completeness, 0-100. Default: from config, else 30
        #[arg(long)]
        level: Option<u32>,

        /// Algorithm technique to emphasize (e.g. "dynamic programming")
        #[arg(short = 'c', long)]
        category: Option<String>,

        /// Override LLM model (e.g., "deepseek-v3-250324")
        #[arg(long)]
        model: Option<String>,

        /// Override chat-completions endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Output directory
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Natural language for comments and descriptions (e.g. "Chinese")
        #[arg(long)]
        commentary_language: Option<String>,

        /// Path to config file (defaults to ./algoskel.toml or ~/.config/algoskel/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Use mock LLM client for testing
        #[arg(long)]
        dry_run: bool,
    },

    /// List supported languages and algorithm categories
    List,

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            id,
            language,
            level,
            category,
            model,
            endpoint,
            output,
            commentary_language,
            config,
            dry_run,
        } => {
            cli::generate::run(
                id,
                language,
                level,
                category,
                model,
                endpoint,
                output,
                commentary_language,
                config,
                dry_run,
            )
            .await?;
        }
        Commands::List => cli::list::run(),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}
