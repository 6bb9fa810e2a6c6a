//! Row types for the ship dimension and its signature tables.
//!
//! Each struct maps 1:1 onto one table's columns, and doubles as the typed
//! CSV record for that table's source file. All signature tables reference
//! `ships.id`; the store enforces that invariant.

use serde::{Deserialize, Serialize};

use crate::ir::IrFeatures;

/// A ship as stored in the `ships` dimension table.
///
/// Created only by ingestion from `ships.csv`; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
  pub id:   i64,
  pub name: String,
}

/// One acoustic measurement: sound level in a labelled frequency band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticSignature {
  pub ship_id:    i64,
  pub band_label: String,
  /// Level in decibels.
  pub level_db:   f64,
}

/// One magnetic measurement: field strength along a labelled spatial axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagneticSignature {
  pub ship_id:  i64,
  pub axis:     String,
  /// Field value in nanotesla.
  pub value_nt: f64,
}

/// One radar-cross-section measurement at a given aspect angle.
///
/// Aspect angle is continuous, so RCS rows form a curve rather than a
/// categorical grouping; no uniqueness is required per angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcsSignature {
  pub ship_id:    i64,
  /// Angle between sensor and ship heading, in degrees.
  pub aspect_deg: f64,
  /// Radar cross-section in dBsm.
  pub rcs_dbsm:   f64,
}

/// One row of the runtime-created `ir_features` table.
///
/// Written once per processed image by the IR feature extractor; never
/// updated. The ship id is inferred from the image filename.
#[derive(Debug, Clone, PartialEq)]
pub struct IrFeatureRow {
  pub ship_id:    i64,
  pub image_path: String,
  pub features:   IrFeatures,
}
