//! seoscan CLI
//!
//! Fetches web pages, indexes their SEO elements, and prints the
//! hierarchy, ranking, and keyword query views.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use seoscan::{engine::SeoEngine, error::Result, models::Config, pipeline, services::HttpFetcher};

/// seoscan - SEO Element Analyzer
#[derive(Parser, Debug)]
#[command(name = "seoscan", version, about = "Web page SEO element analyzer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch pages and index their SEO elements
    Analyze {
        /// URLs to analyze
        #[arg(required = true)]
        urls: Vec<String>,

        /// Also list indexed keywords matching this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Export the analysis log as JSON to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Analyze {
            urls,
            prefix,
            export,
        } => {
            let config = Config::load_or_default(&cli.config);
            config.validate()?;

            let fetcher = HttpFetcher::new(Arc::new(config.clone()))?;
            let mut engine = SeoEngine::new();
            let stats = pipeline::run_analyze(&fetcher, &mut engine, &urls).await;

            println!("{}", pipeline::hierarchy_report(&engine));
            println!("{}", pipeline::ranked_report(&engine));

            if let Some(prefix) = prefix {
                println!("{}", pipeline::keyword_report(&engine, &prefix));
            }

            if config.logging.show_progress {
                println!("{}", pipeline::analysis_report(&engine));
            }

            if let Some(path) = export {
                pipeline::export_analysis(&engine, path)?;
            }

            if stats.failures > 0 {
                log::warn!(
                    "{} of {} page(s) could not be analyzed",
                    stats.failures,
                    stats.pages_requested
                );
            }
        }

        Command::Validate => {
            let config = Config::load(&cli.config)?;
            config.validate()?;
            println!("Configuration OK: {:?}", cli.config);
        }
    }

    Ok(())
}
