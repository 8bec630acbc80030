//! Command-line interface for inspire.
//!
//! Drives the aggregator, renders results to the console and keeps the
//! bundle file up to date.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{load_config, ResolvedConfig};
use crate::core::{Aggregator, FetchOutcome};
use crate::domain::{Quote, ResultBundle};

pub mod render;

/// inspire - Daily quotes, jokes, facts and trending posts
#[derive(Parser, Debug)]
#[command(name = "inspire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to .inspire/config.yaml discovery)
    #[arg(long, global = true, env = "INSPIRE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every category, show a summary and save the bundle
    All {
        /// Bundle file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not write the bundle file
        #[arg(long)]
        no_save: bool,
    },

    /// Fetch quotes only
    Quotes {
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Bundle file to update
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Fetch jokes only
    Jokes {
        #[arg(short = 'n', long)]
        count: Option<usize>,

        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Fetch facts only
    Facts {
        #[arg(short = 'n', long)]
        count: Option<usize>,

        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Fetch a group's hot posts
    Social {
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Group to read (overrides config)
        #[arg(short, long)]
        group: Option<String>,

        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show a summary of a saved bundle
    Summary {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Search saved quotes by author (substring, case-insensitive)
    SearchAuthor {
        needle: String,

        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Search saved quotes by tag (exact, case-insensitive)
    SearchTag {
        needle: String,

        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;

        match self.command {
            Commands::All { output, no_save } => {
                let path = output.unwrap_or_else(|| config.output.clone());
                fetch_all(&config, (!no_save).then_some(path.as_path())).await
            }
            Commands::Quotes { count, file } => {
                let aggregator = Aggregator::new(&config)?;
                let outcome = aggregator
                    .fetch_quotes(count.unwrap_or(config.counts.quotes))
                    .await;
                println!("{}", render::listing(&outcome.records, render::quote));
                let path = bundle_path(&config, file);
                update_bundle(&path, outcome, ResultBundle::replace_quotes).await
            }
            Commands::Jokes { count, file } => {
                let aggregator = Aggregator::new(&config)?;
                let outcome = aggregator
                    .fetch_jokes(count.unwrap_or(config.counts.jokes))
                    .await;
                println!("{}", render::listing(&outcome.records, render::joke));
                let path = bundle_path(&config, file);
                update_bundle(&path, outcome, ResultBundle::replace_jokes).await
            }
            Commands::Facts { count, file } => {
                let aggregator = Aggregator::new(&config)?;
                let outcome = aggregator
                    .fetch_facts(count.unwrap_or(config.counts.facts))
                    .await;
                println!("{}", render::listing(&outcome.records, render::fact));
                let path = bundle_path(&config, file);
                update_bundle(&path, outcome, ResultBundle::replace_facts).await
            }
            Commands::Social { count, group, file } => {
                let mut aggregator = Aggregator::new(&config)?;
                if let Some(group) = group {
                    aggregator = aggregator.with_social_group(&group);
                }
                let outcome = aggregator
                    .fetch_social_posts(count.unwrap_or(config.counts.social_posts))
                    .await;
                if let Some(err) = &outcome.error {
                    eprintln!("Could not fetch posts: {}", err);
                }
                println!("{}", render::listing(&outcome.records, render::social_post));
                update_bundle(
                    &bundle_path(&config, file),
                    outcome,
                    ResultBundle::replace_social_posts,
                )
                .await
            }
            Commands::Summary { file } => {
                let bundle = ResultBundle::load(&bundle_path(&config, file)).await?;
                if bundle.is_empty() {
                    println!("No data to display. Fetch some content first.");
                } else {
                    println!("{}", render::summary(&bundle));
                }
                Ok(())
            }
            Commands::SearchAuthor { needle, file } => {
                let bundle = ResultBundle::load(&bundle_path(&config, file)).await?;
                let found = bundle.find_quotes_by_author(&needle);
                print_matches(&found, &format!("by '{}'", needle));
                Ok(())
            }
            Commands::SearchTag { needle, file } => {
                let bundle = ResultBundle::load(&bundle_path(&config, file)).await?;
                let found = bundle.find_quotes_by_tag(&needle);
                print_matches(&found, &format!("tagged '{}'", needle));
                Ok(())
            }
            Commands::Config => {
                show_config(&config);
                Ok(())
            }
        }
    }
}

fn bundle_path(config: &ResolvedConfig, file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| config.output.clone())
}

/// Run every category, print the summary, optionally save the bundle
async fn fetch_all(config: &ResolvedConfig, save_to: Option<&Path>) -> Result<()> {
    let aggregator = Aggregator::new(config)?;
    let (bundle, reports) = aggregator.fetch_all_reported(config.counts).await;

    println!("{}", render::summary(&bundle));
    println!("Sources:\n{}", render::reports(&reports));

    let authors = bundle.authors();
    if !authors.is_empty() {
        println!("\nAuthors found: {}", authors.join(", "));
        println!("Tags found: {}", bundle.tags().join(", "));
    }

    if let Some(path) = save_to {
        bundle.save(path).await?;
        println!("\nData saved to {}", path.display());
    }

    Ok(())
}

/// Replace one category of the bundle file with a fresh outcome
async fn update_bundle<T>(
    path: &Path,
    outcome: FetchOutcome<T>,
    replace: fn(&mut ResultBundle, Vec<T>),
) -> Result<()> {
    let mut bundle = ResultBundle::load_or_new(path).await?;
    replace(&mut bundle, outcome.records);
    bundle.save(path).await?;
    eprintln!("[Updated {}]", path.display());
    Ok(())
}

fn print_matches(quotes: &[&Quote], description: &str) {
    if quotes.is_empty() {
        println!("No quotes found {}", description);
        return;
    }

    println!("Found {} quotes {}:", quotes.len(), description);
    for q in quotes {
        println!("\n{}", render::quote(q));
    }
}

fn show_config(config: &ResolvedConfig) {
    let config_file = match &config.config_file {
        Some(path) => path.display().to_string(),
        None => "(none, using defaults)".to_string(),
    };
    println!("Config file: {}", config_file);
    println!("Quotes URL: {}", config.endpoints.quotes);
    println!("Jokes URL: {}", config.endpoints.jokes);
    println!("Facts URL: {}", config.endpoints.facts);
    println!("Social base: {}", config.endpoints.social_base);
    println!("Social group: {}", config.social_group);
    println!(
        "Counts: quotes={} jokes={} facts={} social_posts={}",
        config.counts.quotes,
        config.counts.jokes,
        config.counts.facts,
        config.counts.social_posts
    );
    println!(
        "Throttle: request_delay={:?} category_delay={:?} timeout={:?}",
        config.throttle.request_delay,
        config.throttle.category_delay,
        config.throttle.request_timeout
    );
    println!("Output: {}", config.output.display());
}
