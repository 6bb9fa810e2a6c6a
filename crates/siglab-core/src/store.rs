//! The `SignatureStore` trait and its summary/series row types.
//!
//! The trait is implemented by storage backends (e.g. `siglab-store-sqlite`).
//! Ingestion and the CLI depend on this abstraction, not on any concrete
//! backend. Everything is synchronous: the whole pipeline is single-threaded
//! single-writer by design.

use crate::signature::{
  AcousticSignature, IrFeatureRow, MagneticSignature, RcsSignature, Ship,
};

// ─── Summary rows ────────────────────────────────────────────────────────────

/// Mean acoustic level for one (ship, band) group.
#[derive(Debug, Clone, PartialEq)]
pub struct BandMean {
  pub ship_name:     String,
  pub band_label:    String,
  pub mean_level_db: f64,
}

/// Mean magnetic field for one (ship, axis) group.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisMean {
  pub ship_name:     String,
  pub axis:          String,
  pub mean_value_nt: f64,
}

/// One raw RCS sample joined to its ship name. Never aggregated: aspect
/// angle is continuous and the rows trace a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RcsPoint {
  pub ship_name:  String,
  pub aspect_deg: f64,
  pub rcs_dbsm:   f64,
}

// ─── Series rows (presentation-facing) ───────────────────────────────────────

/// One `(label, value)` pair of a ship-scoped series, ordered by label.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
  pub label: String,
  pub value: f64,
}

/// One point of a ship-scoped RCS curve, ordered by aspect angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
  pub aspect_deg: f64,
  pub rcs_dbsm:   f64,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a signature store backend.
///
/// Writes are strictly append-only: no method updates or deduplicates
/// existing rows, so re-running an import duplicates its rows. Each append
/// call is atomic — either every row of the call lands or none do — but no
/// atomicity spans calls.
///
/// All reads return an empty `Vec` (not an error) when nothing matches.
pub trait SignatureStore {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Append-only writes ────────────────────────────────────────────────

  /// Append ships to the dimension table. Duplicate names are rejected by
  /// the store's uniqueness constraint.
  fn append_ships(&mut self, rows: &[Ship]) -> Result<usize, Self::Error>;

  fn append_acoustic(
    &mut self,
    rows: &[AcousticSignature],
  ) -> Result<usize, Self::Error>;

  fn append_magnetic(
    &mut self,
    rows: &[MagneticSignature],
  ) -> Result<usize, Self::Error>;

  fn append_rcs(&mut self, rows: &[RcsSignature]) -> Result<usize, Self::Error>;

  /// Insert one feature row per processed image, all in a single unit.
  fn insert_ir_features(
    &mut self,
    rows: &[IrFeatureRow],
  ) -> Result<usize, Self::Error>;

  // ── Aggregations ──────────────────────────────────────────────────────

  /// Mean `level_db` per (ship name, band label), ordered by ship then band.
  fn acoustic_summary(&self) -> Result<Vec<BandMean>, Self::Error>;

  /// Mean `value_nt` per (ship name, axis), ordered by ship then axis.
  fn magnetic_summary(&self) -> Result<Vec<AxisMean>, Self::Error>;

  /// Raw RCS rows joined to ship names, ordered by ship then aspect angle.
  fn rcs_summary(&self) -> Result<Vec<RcsPoint>, Self::Error>;

  // ── Ship-scoped series ────────────────────────────────────────────────

  /// Raw `(band_label, level_db)` pairs for one ship, ordered by band.
  fn acoustic_bands(
    &self,
    ship_name: &str,
  ) -> Result<Vec<SeriesPoint>, Self::Error>;

  /// Raw `(axis, value_nt)` pairs for one ship, ordered by axis.
  fn magnetic_axes(
    &self,
    ship_name: &str,
  ) -> Result<Vec<SeriesPoint>, Self::Error>;

  /// The RCS curve for one ship, ordered by aspect angle.
  fn rcs_curve(&self, ship_name: &str) -> Result<Vec<CurvePoint>, Self::Error>;
}
