//! karma command-line interface.
//!
//! Reads `karma.toml` (or the path given with `--config`), opens the
//! SQLite score store, and either republishes high scores from an
//! activity-event dump (`prewarm`) or prints a month's leaderboard
//! (`high-scores`).

mod source;

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Duration;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use karma_scores::{
  publish::prewarm_high_scores,
  query::{TimeWindow, high_scores},
  source::CachedEvents,
  tag::OsTagger,
};
use karma_store_sqlite::SqliteStore;

use source::ReplaySource;

#[derive(Parser)]
#[command(author, version, about = "Repository contribution high scores")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "karma.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Recompute contribution scores from an activity-event dump and
  /// publish them as a fresh generation.
  Prewarm {
    #[arg(long)]
    owner:  String,
    #[arg(long)]
    repo:   String,
    /// JSON file holding the activity events to score.
    #[arg(long)]
    events: PathBuf,
  },
  /// Print the top contributors for one calendar month.
  HighScores {
    #[arg(long)]
    owner: String,
    #[arg(long)]
    repo:  String,
    #[arg(long)]
    year:  i32,
    /// Calendar month, 1-12.
    #[arg(long)]
    month: u32,
    /// How many actors to print.
    #[arg(long, default_value_t = 5)]
    top:   usize,
  },
}

/// Runtime configuration, deserialised from `karma.toml` and `KARMA_*`
/// environment variables.
#[derive(Deserialize, Clone)]
struct AppConfig {
  #[serde(default = "default_store_path")]
  store_path:  PathBuf,
  #[serde(default = "default_ready_label")]
  ready_label: String,
}

fn default_store_path() -> PathBuf { PathBuf::from("karma.db") }

fn default_ready_label() -> String { "ready for review".to_owned() }

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("KARMA"))
    .build()
    .context("failed to read config file")?;

  let app_cfg: AppConfig = settings
    .try_deserialize()
    .context("failed to deserialise AppConfig")?;

  let store = SqliteStore::open(&app_cfg.store_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", app_cfg.store_path)
    })?;

  match cli.command {
    Command::Prewarm { owner, repo, events } => {
      // Negative staleness forces a fresh read of the dump while still
      // rewriting the cache entry for other readers.
      let source = CachedEvents::new(
        store.clone(),
        ReplaySource::new(events),
        Duration::minutes(-1),
      );
      prewarm_high_scores(
        &source,
        &store,
        &OsTagger,
        &owner,
        &repo,
        &app_cfg.ready_label,
      )
      .await
      .with_context(|| {
        format!("failed to prewarm high scores for {owner}/{repo}")
      })?;
      tracing::info!("published a fresh generation for {owner}/{repo}");
    }
    Command::HighScores { owner, repo, year, month, top } => {
      let window = TimeWindow::month(year, month).with_context(|| {
        format!("{month} is not a valid month between 01-12")
      })?;
      let scores = high_scores(&store, &owner, &repo, window, top)
        .await
        .context("high-score query failed")?;
      match scores {
        Some(scores) => {
          for score in scores {
            println!("{} {}", score.score, score.actor_id);
          }
        }
        None => anyhow::bail!("scores for {owner}/{repo} were not found"),
      }
    }
  }

  Ok(())
}
