//! Typed CSV import: one loader per table, `import_all` in FK-safe order.
//!
//! Each loader reads its whole file into memory, maps the header columns
//! onto the destination row struct via serde, and appends every row in one
//! store call. No deduplication, no partial-row recovery: a malformed row
//! fails the read before anything is handed to the store.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use siglab_core::{
  signature::{AcousticSignature, MagneticSignature, RcsSignature, Ship},
  store::SignatureStore,
};

use crate::error::{Error, Result};

/// Default file names under the CSV directory, one per table.
pub const SHIPS_CSV: &str = "ships.csv";
pub const ACOUSTIC_CSV: &str = "acoustic_signatures.csv";
pub const MAGNETIC_CSV: &str = "magnetic_signatures.csv";
pub const RCS_CSV: &str = "rcs_signatures.csv";

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
  if !path.exists() {
    return Err(Error::SourceNotFound(path.to_path_buf()));
  }
  let mut reader = csv::Reader::from_path(path)
    .map_err(|source| Error::Csv { path: path.to_path_buf(), source })?;
  reader
    .deserialize()
    .collect::<csv::Result<Vec<T>>>()
    .map_err(|source| Error::Csv { path: path.to_path_buf(), source })
}

/// Import `ships.csv` into the ship dimension table.
pub fn import_ships<S: SignatureStore>(store: &mut S, path: &Path) -> Result<usize> {
  let rows: Vec<Ship> = read_rows(path)?;
  let n = store.append_ships(&rows).map_err(Error::store)?;
  info!(rows = n, path = %path.display(), "imported ships");
  Ok(n)
}

/// Import `acoustic_signatures.csv`.
pub fn import_acoustic<S: SignatureStore>(store: &mut S, path: &Path) -> Result<usize> {
  let rows: Vec<AcousticSignature> = read_rows(path)?;
  let n = store.append_acoustic(&rows).map_err(Error::store)?;
  info!(rows = n, path = %path.display(), "imported acoustic signatures");
  Ok(n)
}

/// Import `magnetic_signatures.csv`.
pub fn import_magnetic<S: SignatureStore>(store: &mut S, path: &Path) -> Result<usize> {
  let rows: Vec<MagneticSignature> = read_rows(path)?;
  let n = store.append_magnetic(&rows).map_err(Error::store)?;
  info!(rows = n, path = %path.display(), "imported magnetic signatures");
  Ok(n)
}

/// Import `rcs_signatures.csv`.
pub fn import_rcs<S: SignatureStore>(store: &mut S, path: &Path) -> Result<usize> {
  let rows: Vec<RcsSignature> = read_rows(path)?;
  let n = store.append_rcs(&rows).map_err(Error::store)?;
  info!(rows = n, path = %path.display(), "imported rcs signatures");
  Ok(n)
}

/// Per-file row counts from [`import_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportCounts {
  pub ships:    usize,
  pub acoustic: usize,
  pub magnetic: usize,
  pub rcs:      usize,
}

/// Import the four sample CSVs from `csv_dir` in fixed order: ships first,
/// then the signature tables, so every foreign key resolves.
///
/// No transaction spans files — a failure partway leaves the earlier files
/// committed.
pub fn import_all<S: SignatureStore>(store: &mut S, csv_dir: &Path) -> Result<ImportCounts> {
  let ships = import_ships(store, &csv_dir.join(SHIPS_CSV))?;
  let acoustic = import_acoustic(store, &csv_dir.join(ACOUSTIC_CSV))?;
  let magnetic = import_magnetic(store, &csv_dir.join(MAGNETIC_CSV))?;
  let rcs = import_rcs(store, &csv_dir.join(RCS_CSV))?;
  Ok(ImportCounts { ships, acoustic, magnetic, rcs })
}
