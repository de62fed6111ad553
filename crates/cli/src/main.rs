//! CareerFit CLI — the main entry point.
//!
//! Commands:
//! - `quiz`        — Interactive assessment through every screen
//! - `score`       — Score an answer list against one career
//! - `careers`     — Browse and search the career library
//! - `questions`   — List the question bank
//! - `recommend`   — Rank careers for an answer list
//! - `config`      — Show, locate or validate the configuration
//! - `onboard`     — Write a default config file
//! - `status`      — Show configuration and catalog status
//! - `completions` — Generate shell completions

use careerfit_config::{AppConfig, LoggingConfig};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "careerfit",
    about = "CareerFit — find out how well your traits fit a career",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Load the catalog from this TOML file instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the assessment interactively
    Quiz,

    /// Score 18 answers against a career
    Score {
        /// Career id, e.g. `doctor`
        #[arg(short, long)]
        career: String,

        /// Comma-separated answers (1-4), one per question in order
        #[arg(short, long)]
        answers: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Browse the career library
    Careers {
        /// Only careers in this stream (pcb, pcm, commerce, humanities)
        #[arg(short, long)]
        domain: Option<String>,

        /// Case-insensitive search over name and description
        #[arg(short, long)]
        query: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// List the question bank
    Questions {
        /// Only questions for this trait, e.g. `creativity`
        #[arg(short = 't', long = "trait")]
        trait_key: Option<String>,
    },

    /// Rank careers for an answer list
    Recommend {
        /// Comma-separated answers (1-4), one per question in order
        #[arg(short, long)]
        answers: String,

        /// How many careers to show (defaults to scoring.recommendation_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Write a default configuration file
    Onboard,

    /// Show configuration and catalog status
    Status,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Validate the config file and environment overrides
    Validate,
}

fn init_tracing(verbose: bool, logging: &LoggingConfig) {
    let filter = if verbose { "debug" } else { logging.level.as_str() };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging comes from the config file when it loads; a broken config is
    // reported by the command that needs it
    let loaded = AppConfig::load();
    let logging = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    init_tracing(cli.verbose, &logging);

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show(loaded?).await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate(loaded).await?,
        },
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "careerfit", &mut std::io::stdout());
        }
        command => {
            let ctx = commands::Context::new(loaded?, cli.catalog)?;
            match command {
                Commands::Quiz => commands::quiz::run(&ctx).await?,
                Commands::Score { career, answers, json } => {
                    commands::score::run(&ctx, &career, &answers, json).await?
                }
                Commands::Careers { domain, query, json } => {
                    commands::careers::run(&ctx, domain.as_deref(), query.as_deref(), json).await?
                }
                Commands::Questions { trait_key } => {
                    commands::questions::run(&ctx, trait_key.as_deref()).await?
                }
                Commands::Recommend { answers, limit } => {
                    commands::recommend::run(&ctx, &answers, limit).await?
                }
                Commands::Status => commands::status::run(&ctx).await?,
                Commands::Config { .. } | Commands::Onboard | Commands::Completions { .. } => {}
            }
        }
    }

    Ok(())
}
