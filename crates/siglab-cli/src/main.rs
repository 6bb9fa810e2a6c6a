//! `siglab` — command-line surface for the Maritime Signature Lab.
//!
//! # Usage
//!
//! ```text
//! siglab init-db
//! siglab import-data
//! siglab acoustic-summary
//! siglab magnetic-summary
//! siglab rcs-summary
//! siglab ir-features
//! ```

mod config;
mod table;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use siglab_core::store::SignatureStore as _;
use siglab_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use config::Paths;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "siglab", about = "Maritime signature lab (synthetic data demo)")]
struct Cli {
  /// Path to a TOML config file overriding the default path layout.
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base directory for the db/ and data/ trees (default: current dir).
  #[arg(long, value_name = "DIR")]
  base_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Reset and initialise the SQLite database.
  InitDb,
  /// Import the sample CSV files (ships first, then signature tables).
  ImportData,
  /// Show average band levels per ship.
  AcousticSummary,
  /// Show average field per axis and ship.
  MagneticSummary,
  /// Show RCS values per ship and aspect angle.
  RcsSummary,
  /// Compute IR features for images in the IR directory.
  IrFeatures,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let paths = Paths::resolve(cli.config.as_deref(), cli.base_dir.as_deref())?;

  match cli.command {
    Command::InitDb => {
      SqliteStore::reset(&paths.db)
        .with_context(|| format!("initialising database {}", paths.db.display()))?;
      println!("Database initialised at: {}", paths.db.display());
    }

    Command::ImportData => {
      let mut store = open_store(&paths)?;
      let counts = siglab_ingest::import_all(&mut store, &paths.csv_dir)
        .with_context(|| format!("importing CSV data from {}", paths.csv_dir.display()))?;
      println!(
        "Imported {} ships, {} acoustic, {} magnetic, {} rcs rows.",
        counts.ships, counts.acoustic, counts.magnetic, counts.rcs
      );
    }

    Command::AcousticSummary => {
      let store = open_store(&paths)?;
      let rows: Vec<Vec<String>> = store
        .acoustic_summary()
        .context("querying acoustic summary")?
        .into_iter()
        .map(|r| vec![r.ship_name, r.band_label, format!("{:.2}", r.mean_level_db)])
        .collect();
      print!("{}", table::render(&["ship_name", "band_label", "mean_level_db"], &rows));
    }

    Command::MagneticSummary => {
      let store = open_store(&paths)?;
      let rows: Vec<Vec<String>> = store
        .magnetic_summary()
        .context("querying magnetic summary")?
        .into_iter()
        .map(|r| vec![r.ship_name, r.axis, format!("{:.2}", r.mean_value_nt)])
        .collect();
      print!("{}", table::render(&["ship_name", "axis", "mean_value_nt"], &rows));
    }

    Command::RcsSummary => {
      let store = open_store(&paths)?;
      let rows: Vec<Vec<String>> = store
        .rcs_summary()
        .context("querying rcs summary")?
        .into_iter()
        .map(|r| {
          vec![r.ship_name, format!("{:.1}", r.aspect_deg), format!("{:.2}", r.rcs_dbsm)]
        })
        .collect();
      print!("{}", table::render(&["ship_name", "aspect_deg", "rcs_dbsm"], &rows));
    }

    Command::IrFeatures => {
      let mut store = open_store(&paths)?;
      let report = siglab_ingest::process_ir_directory(&mut store, &paths.ir_dir)
        .with_context(|| format!("processing IR images in {}", paths.ir_dir.display()))?;
      println!(
        "IR features stored: {} inserted, {} skipped.",
        report.inserted,
        report.skipped()
      );
    }
  }

  Ok(())
}

fn open_store(paths: &Paths) -> Result<SqliteStore> {
  SqliteStore::open(&paths.db)
    .with_context(|| format!("opening database {}", paths.db.display()))
}
