use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sketchboard::config::{Config, ConfigError};
use sketchboard::document::{self, ImportError};
use sketchboard::persist::FileStorage;
use sketchboard::store::Store;
use tracing::info;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("import failed: {0}")]
    Import(#[from] ImportError),
}

#[derive(Parser, Debug)]
#[command(name = "sketchboard", about = "Inspect and manage a stored sketchboard")]
struct Cli {
    /// Storage directory; overrides SKETCHBOARD_DATA_DIR.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print shape counts and background settings.
    Info,
    /// Write the stored board as a JSON document.
    Export { path: PathBuf },
    /// Replace the stored board with a JSON document.
    Import { path: PathBuf },
    /// Remove every stored shape.
    Clear,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    let mut store = Store::load(Box::new(FileStorage::new(&config.data_dir)), &config);

    match cli.command {
        Command::Info => run_info(&store),
        Command::Export { path } => run_export(&store, path),
        Command::Import { path } => run_import(&mut store, path),
        Command::Clear => {
            store.clear_all();
            println!("cleared");
            Ok(())
        }
    }
}

fn run_info(store: &Store) -> Result<(), CliError> {
    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    for shape in store.shapes() {
        *by_kind.entry(shape.kind.name()).or_default() += 1;
    }
    println!("shapes: {}", store.shapes().len());
    for (kind, count) in by_kind {
        println!("  {kind}: {count}");
    }
    println!("background: {}", serde_json::to_string(store.background())?);
    println!("snap to grid: {}", store.snap_to_grid());
    Ok(())
}

fn run_export(store: &Store, path: PathBuf) -> Result<(), CliError> {
    let json = document::export_document(store.shapes())?;
    std::fs::write(&path, json).map_err(|source| CliError::Io { path: path.clone(), source })?;
    info!(count = store.shapes().len(), path = %path.display(), "exported");
    Ok(())
}

fn run_import(store: &mut Store, path: PathBuf) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(&path).map_err(|source| CliError::Io { path, source })?;
    let count = document::import_document(store, &raw)?;
    println!("imported {count} shapes");
    Ok(())
}
