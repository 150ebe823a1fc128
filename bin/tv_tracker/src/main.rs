use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracker::app::{App, create_session};
use tracker::config::TrackerConfig;
use tv_tracker::menu::Menu;

const DEFAULT_LOG_FILTER: &str = "tv_tracker=info,tracker=info,tvmaze=warn";

#[derive(Parser, Debug)]
#[command(name = "tv_tracker", about = "Track upcoming episodes of your TV shows")]
struct Args {
    /// Folder containing tracker_config.json
    #[arg(long, default_value = "./res")]
    config: PathBuf,
    /// Snapshot file, overrides the configured path
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = TrackerConfig::load(args.config.as_path())
        .await
        .with_context(|| format!("failed to load config from '{}'", args.config.display()))?;

    // relative snapshot paths in the config live next to it
    let snapshot_path = match args.snapshot {
        Some(path) => path,
        None if config.snapshot_path.is_relative() => args.config.join(&config.snapshot_path),
        None => config.snapshot_path.clone(),
    };

    let session = create_session(&config).context("failed to create http client")?;
    let mut app = App::new(session, snapshot_path).await;

    let today = chrono::Local::now().date_naive();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), today);
    menu.run(&mut app).await?;
    Ok(())
}
