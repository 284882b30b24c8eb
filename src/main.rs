#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Catalog file chosen at startup; `None` means the built-in sample
static CATALOG_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Catalog file name looked up inside the data directory
const CATALOG_FILE: &str = "quests.json";

/// Get the catalog path selected on the command line (if any)
pub fn get_catalog_path() -> Option<PathBuf> {
    CATALOG_PATH.get().cloned().flatten()
}

/// Questboard - browse quests and their rewards
#[derive(Parser, Debug)]
#[command(name = "questboard-desktop")]
#[command(about = "Questboard - browse quests, rewards and completion")]
struct Args {
    /// Quest catalog JSON file
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Data directory searched for quests.json (default: platform data dir)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log filter, e.g. "info" or "questboard_core=debug".
    /// Takes precedence over RUST_LOG; with neither set, "info".
    #[arg(long)]
    log_filter: Option<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("questboard")
}

/// Pick the catalog: explicit flag, else `quests.json` in the data dir if present.
fn resolve_catalog_path(catalog: Option<PathBuf>, data_dir: &Path) -> Option<PathBuf> {
    if catalog.is_some() {
        return catalog;
    }
    let candidate = data_dir.join(CATALOG_FILE);
    candidate.is_file().then_some(candidate)
}

const DEFAULT_LOG_FILTER: &str = "info";

/// Filter directives to use: the `--log-filter` flag, else RUST_LOG, else "info".
fn choose_filter(flag: Option<&str>, env: Option<String>) -> String {
    flag.map(str::to_string)
        .or(env.filter(|directives| !directives.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn init_logging(flag: Option<&str>) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(choose_filter(flag, env));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_filter.as_deref());

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let catalog = resolve_catalog_path(args.catalog, &data_dir);
    match &catalog {
        Some(path) => tracing::info!("Starting with catalog {:?}", path),
        None => tracing::info!("No catalog in {:?}, using sample quests", data_dir),
    }
    let _ = CATALOG_PATH.set(catalog);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Questboard")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
