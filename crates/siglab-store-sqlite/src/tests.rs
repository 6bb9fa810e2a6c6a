//! Integration tests for `SqliteStore` against an in-memory database.

use siglab_core::{
  ir::IrFeatures,
  signature::{AcousticSignature, IrFeatureRow, MagneticSignature, RcsSignature, Ship},
  store::SignatureStore,
};

use crate::{Error, SqliteStore};

fn ship(id: i64, name: &str) -> Ship {
  Ship { id, name: name.into() }
}

fn acoustic(ship_id: i64, band: &str, level_db: f64) -> AcousticSignature {
  AcousticSignature { ship_id, band_label: band.into(), level_db }
}

fn magnetic(ship_id: i64, axis: &str, value_nt: f64) -> MagneticSignature {
  MagneticSignature { ship_id, axis: axis.into(), value_nt }
}

fn rcs(ship_id: i64, aspect_deg: f64, rcs_dbsm: f64) -> RcsSignature {
  RcsSignature { ship_id, aspect_deg, rcs_dbsm }
}

/// In-memory store preloaded with two ships.
fn store_with_ships() -> SqliteStore {
  let mut s = SqliteStore::open_in_memory().expect("in-memory store");
  s.append_ships(&[ship(1, "Alpha"), ship(2, "Bravo")]).unwrap();
  s
}

// ─── Appends ─────────────────────────────────────────────────────────────────

#[test]
fn append_increases_count_by_row_count() {
  let mut s = store_with_ships();
  assert_eq!(s.count("ships").unwrap(), 2);

  let n = s
    .append_acoustic(&[
      acoustic(1, "LF", 100.0),
      acoustic(1, "MF", 90.0),
      acoustic(2, "LF", 95.0),
    ])
    .unwrap();
  assert_eq!(n, 3);
  assert_eq!(s.count("acoustic_signatures").unwrap(), 3);
}

#[test]
fn reimport_duplicates_rows() {
  let mut s = store_with_ships();
  let rows = [acoustic(1, "LF", 100.0), acoustic(1, "MF", 90.0)];

  // No dedup by design: appending the same rows twice doubles the count.
  s.append_acoustic(&rows).unwrap();
  s.append_acoustic(&rows).unwrap();
  assert_eq!(s.count("acoustic_signatures").unwrap(), 4);
}

#[test]
fn duplicate_ship_name_is_constraint() {
  let mut s = store_with_ships();
  let err = s.append_ships(&[ship(3, "Alpha")]).unwrap_err();
  assert!(matches!(err, Error::Constraint(_)));
}

#[test]
fn orphan_signature_row_is_constraint() {
  let mut s = store_with_ships();
  let err = s.append_acoustic(&[acoustic(99, "LF", 80.0)]).unwrap_err();
  assert!(matches!(err, Error::Constraint(_)));
}

#[test]
fn failed_append_commits_nothing() {
  let mut s = store_with_ships();

  // Second row violates the FK; the whole call must roll back.
  let result = s.append_acoustic(&[acoustic(1, "LF", 80.0), acoustic(99, "LF", 80.0)]);
  assert!(result.is_err());
  assert_eq!(s.count("acoustic_signatures").unwrap(), 0);
}

#[test]
fn deleting_a_ship_cascades_to_signatures() {
  let mut s = store_with_ships();
  s.append_acoustic(&[acoustic(1, "LF", 100.0)]).unwrap();
  s.append_rcs(&[rcs(1, 0.0, 10.0)]).unwrap();

  s.exec("DELETE FROM ships WHERE id = 1").unwrap();
  assert_eq!(s.count("acoustic_signatures").unwrap(), 0);
  assert_eq!(s.count("rcs_signatures").unwrap(), 0);
}

// ─── Aggregations ────────────────────────────────────────────────────────────

#[test]
fn acoustic_summary_is_arithmetic_mean() {
  let mut s = store_with_ships();
  s.append_acoustic(&[
    acoustic(1, "LF", 10.0),
    acoustic(1, "LF", 20.0),
    acoustic(1, "LF", 30.0),
  ])
  .unwrap();

  let summary = s.acoustic_summary().unwrap();
  assert_eq!(summary.len(), 1);
  assert_eq!(summary[0].ship_name, "Alpha");
  assert_eq!(summary[0].band_label, "LF");
  assert_eq!(summary[0].mean_level_db, 20.0);
}

#[test]
fn acoustic_summary_orders_by_ship_then_band() {
  let mut s = store_with_ships();
  s.append_acoustic(&[
    acoustic(2, "MF", 91.0),
    acoustic(2, "LF", 92.0),
    acoustic(1, "MF", 93.0),
    acoustic(1, "LF", 94.0),
  ])
  .unwrap();

  let keys: Vec<(String, String)> = s
    .acoustic_summary()
    .unwrap()
    .into_iter()
    .map(|r| (r.ship_name, r.band_label))
    .collect();
  assert_eq!(keys, [
    ("Alpha".into(), "LF".into()),
    ("Alpha".into(), "MF".into()),
    ("Bravo".into(), "LF".into()),
    ("Bravo".into(), "MF".into()),
  ]);
}

#[test]
fn magnetic_summary_groups_by_axis() {
  let mut s = store_with_ships();
  s.append_magnetic(&[
    magnetic(1, "x", 100.0),
    magnetic(1, "x", 300.0),
    magnetic(1, "z", 50.0),
  ])
  .unwrap();

  let summary = s.magnetic_summary().unwrap();
  assert_eq!(summary.len(), 2);
  assert_eq!(summary[0].axis, "x");
  assert_eq!(summary[0].mean_value_nt, 200.0);
  assert_eq!(summary[1].axis, "z");
  assert_eq!(summary[1].mean_value_nt, 50.0);
}

#[test]
fn rcs_summary_returns_raw_rows() {
  let mut s = store_with_ships();
  s.append_rcs(&[
    rcs(1, 90.0, 12.0),
    rcs(1, 0.0, 10.0),
    // Duplicate angle must survive — RCS is never aggregated.
    rcs(1, 0.0, 11.0),
  ])
  .unwrap();

  let rows = s.rcs_summary().unwrap();
  assert_eq!(rows.len(), 3);
  assert_eq!(rows[0].aspect_deg, 0.0);
  assert_eq!(rows[1].aspect_deg, 0.0);
  assert_eq!(rows[2].aspect_deg, 90.0);
}

#[test]
fn summaries_over_empty_tables_are_empty() {
  let s = SqliteStore::open_in_memory().unwrap();
  assert!(s.acoustic_summary().unwrap().is_empty());
  assert!(s.magnetic_summary().unwrap().is_empty());
  assert!(s.rcs_summary().unwrap().is_empty());
}

// ─── Ship-scoped series ──────────────────────────────────────────────────────

#[test]
fn acoustic_bands_scoped_and_ordered() {
  let mut s = store_with_ships();
  s.append_acoustic(&[
    acoustic(1, "MF", 90.0),
    acoustic(1, "LF", 100.0),
    acoustic(2, "LF", 95.0),
  ])
  .unwrap();

  let series = s.acoustic_bands("Alpha").unwrap();
  assert_eq!(series.len(), 2);
  assert_eq!(series[0].label, "LF");
  assert_eq!(series[0].value, 100.0);
  assert_eq!(series[1].label, "MF");
}

#[test]
fn magnetic_axes_for_unknown_ship_is_empty() {
  let mut s = store_with_ships();
  s.append_magnetic(&[magnetic(1, "x", 100.0)]).unwrap();
  assert!(s.magnetic_axes("Zulu").unwrap().is_empty());
}

#[test]
fn rcs_curve_ordered_by_angle() {
  let mut s = store_with_ships();
  s.append_rcs(&[rcs(1, 180.0, 14.0), rcs(1, 0.0, 10.0), rcs(1, 90.0, 12.0)])
    .unwrap();

  let curve = s.rcs_curve("Alpha").unwrap();
  let angles: Vec<f64> = curve.iter().map(|p| p.aspect_deg).collect();
  assert_eq!(angles, [0.0, 90.0, 180.0]);
}

// ─── IR features ─────────────────────────────────────────────────────────────

#[test]
fn insert_ir_features_single_unit() {
  let mut s = store_with_ships();
  let rows = [
    IrFeatureRow {
      ship_id:    1,
      image_path: "ship_001_view_000.png".into(),
      features:   IrFeatures { mean_intensity: 255.0, hotspot_count: 100, area_px: 100 },
    },
    IrFeatureRow {
      ship_id:    2,
      image_path: "ship_002_view_000.png".into(),
      features:   IrFeatures::default(),
    },
  ];

  assert_eq!(s.insert_ir_features(&rows).unwrap(), 2);
  assert_eq!(s.count("ir_features").unwrap(), 2);
}

#[test]
fn insert_ir_features_orphan_rolls_back_all() {
  let mut s = store_with_ships();
  let rows = [
    IrFeatureRow {
      ship_id:    1,
      image_path: "ship_001_view_000.png".into(),
      features:   IrFeatures::default(),
    },
    IrFeatureRow {
      ship_id:    99,
      image_path: "ship_099_view_000.png".into(),
      features:   IrFeatures::default(),
    },
  ];

  assert!(matches!(s.insert_ir_features(&rows), Err(Error::Constraint(_))));
  assert_eq!(s.count("ir_features").unwrap(), 0);
}
