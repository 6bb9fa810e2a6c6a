//! [`SqliteStore`] — the SQLite implementation of [`SignatureStore`].

use std::{fs, path::Path};

use rusqlite::Connection;
use tracing::info;

use siglab_core::{
  signature::{AcousticSignature, IrFeatureRow, MagneticSignature, RcsSignature, Ship},
  store::{AxisMean, BandMean, CurvePoint, RcsPoint, SeriesPoint, SignatureStore},
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A signature store backed by a single SQLite file.
pub struct SqliteStore {
  conn: Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = Connection::open(path)?;
    let store = Self { conn };
    store.init_schema()?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub fn open_in_memory() -> Result<Self> {
    let conn = Connection::open_in_memory()?;
    let store = Self { conn };
    store.init_schema()?;
    Ok(store)
  }

  /// Delete any existing database file at `path` and recreate it from the
  /// schema — a clean reset for development.
  pub fn reset(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if path.exists() {
      fs::remove_file(path)?;
    }
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    info!(path = %path.display(), "resetting database");
    Self::open(path)
  }

  fn init_schema(&self) -> Result<()> {
    self.conn.execute_batch(SCHEMA)?;
    Ok(())
  }
}

// ─── SignatureStore impl ─────────────────────────────────────────────────────

impl SignatureStore for SqliteStore {
  type Error = Error;

  // ── Append-only writes ────────────────────────────────────────────────────

  fn append_ships(&mut self, rows: &[Ship]) -> Result<usize> {
    let tx = self.conn.transaction()?;
    {
      let mut stmt = tx.prepare("INSERT INTO ships (id, name) VALUES (?1, ?2)")?;
      for row in rows {
        stmt
          .execute(rusqlite::params![row.id, row.name])
          .map_err(Error::from_sqlite)?;
      }
    }
    tx.commit()?;
    Ok(rows.len())
  }

  fn append_acoustic(&mut self, rows: &[AcousticSignature]) -> Result<usize> {
    let tx = self.conn.transaction()?;
    {
      let mut stmt = tx.prepare(
        "INSERT INTO acoustic_signatures (ship_id, band_label, level_db)
         VALUES (?1, ?2, ?3)",
      )?;
      for row in rows {
        stmt
          .execute(rusqlite::params![row.ship_id, row.band_label, row.level_db])
          .map_err(Error::from_sqlite)?;
      }
    }
    tx.commit()?;
    Ok(rows.len())
  }

  fn append_magnetic(&mut self, rows: &[MagneticSignature]) -> Result<usize> {
    let tx = self.conn.transaction()?;
    {
      let mut stmt = tx.prepare(
        "INSERT INTO magnetic_signatures (ship_id, axis, value_nt)
         VALUES (?1, ?2, ?3)",
      )?;
      for row in rows {
        stmt
          .execute(rusqlite::params![row.ship_id, row.axis, row.value_nt])
          .map_err(Error::from_sqlite)?;
      }
    }
    tx.commit()?;
    Ok(rows.len())
  }

  fn append_rcs(&mut self, rows: &[RcsSignature]) -> Result<usize> {
    let tx = self.conn.transaction()?;
    {
      let mut stmt = tx.prepare(
        "INSERT INTO rcs_signatures (ship_id, aspect_deg, rcs_dbsm)
         VALUES (?1, ?2, ?3)",
      )?;
      for row in rows {
        stmt
          .execute(rusqlite::params![row.ship_id, row.aspect_deg, row.rcs_dbsm])
          .map_err(Error::from_sqlite)?;
      }
    }
    tx.commit()?;
    Ok(rows.len())
  }

  fn insert_ir_features(&mut self, rows: &[IrFeatureRow]) -> Result<usize> {
    let tx = self.conn.transaction()?;
    {
      let mut stmt = tx.prepare(
        "INSERT INTO ir_features
           (ship_id, image_path, mean_intensity, hotspot_count, area_px)
         VALUES (?1, ?2, ?3, ?4, ?5)",
      )?;
      for row in rows {
        stmt
          .execute(rusqlite::params![
            row.ship_id,
            row.image_path,
            row.features.mean_intensity,
            row.features.hotspot_count,
            row.features.area_px,
          ])
          .map_err(Error::from_sqlite)?;
      }
    }
    tx.commit()?;
    Ok(rows.len())
  }

  // ── Aggregations ──────────────────────────────────────────────────────────

  fn acoustic_summary(&self) -> Result<Vec<BandMean>> {
    let mut stmt = self.conn.prepare(
      "SELECT s.name, a.band_label, AVG(a.level_db)
       FROM acoustic_signatures a
       JOIN ships s ON s.id = a.ship_id
       GROUP BY s.name, a.band_label
       ORDER BY s.name, a.band_label",
    )?;
    let rows = stmt
      .query_map([], |row| {
        Ok(BandMean {
          ship_name:     row.get(0)?,
          band_label:    row.get(1)?,
          mean_level_db: row.get(2)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn magnetic_summary(&self) -> Result<Vec<AxisMean>> {
    let mut stmt = self.conn.prepare(
      "SELECT s.name, m.axis, AVG(m.value_nt)
       FROM magnetic_signatures m
       JOIN ships s ON s.id = m.ship_id
       GROUP BY s.name, m.axis
       ORDER BY s.name, m.axis",
    )?;
    let rows = stmt
      .query_map([], |row| {
        Ok(AxisMean {
          ship_name:     row.get(0)?,
          axis:          row.get(1)?,
          mean_value_nt: row.get(2)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn rcs_summary(&self) -> Result<Vec<RcsPoint>> {
    let mut stmt = self.conn.prepare(
      "SELECT s.name, r.aspect_deg, r.rcs_dbsm
       FROM rcs_signatures r
       JOIN ships s ON s.id = r.ship_id
       ORDER BY s.name, r.aspect_deg",
    )?;
    let rows = stmt
      .query_map([], |row| {
        Ok(RcsPoint {
          ship_name:  row.get(0)?,
          aspect_deg: row.get(1)?,
          rcs_dbsm:   row.get(2)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  // ── Ship-scoped series ────────────────────────────────────────────────────

  fn acoustic_bands(&self, ship_name: &str) -> Result<Vec<SeriesPoint>> {
    let mut stmt = self.conn.prepare(
      "SELECT a.band_label, a.level_db
       FROM acoustic_signatures a
       JOIN ships s ON s.id = a.ship_id
       WHERE s.name = ?1
       ORDER BY a.band_label",
    )?;
    let rows = stmt
      .query_map(rusqlite::params![ship_name], |row| {
        Ok(SeriesPoint { label: row.get(0)?, value: row.get(1)? })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn magnetic_axes(&self, ship_name: &str) -> Result<Vec<SeriesPoint>> {
    let mut stmt = self.conn.prepare(
      "SELECT m.axis, m.value_nt
       FROM magnetic_signatures m
       JOIN ships s ON s.id = m.ship_id
       WHERE s.name = ?1
       ORDER BY m.axis",
    )?;
    let rows = stmt
      .query_map(rusqlite::params![ship_name], |row| {
        Ok(SeriesPoint { label: row.get(0)?, value: row.get(1)? })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn rcs_curve(&self, ship_name: &str) -> Result<Vec<CurvePoint>> {
    let mut stmt = self.conn.prepare(
      "SELECT r.aspect_deg, r.rcs_dbsm
       FROM rcs_signatures r
       JOIN ships s ON s.id = r.ship_id
       WHERE s.name = ?1
       ORDER BY r.aspect_deg",
    )?;
    let rows = stmt
      .query_map(rusqlite::params![ship_name], |row| {
        Ok(CurvePoint { aspect_deg: row.get(0)?, rcs_dbsm: row.get(1)? })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }
}

#[cfg(test)]
impl SqliteStore {
  /// Row count of one table; test-only.
  pub(crate) fn count(&self, table: &str) -> Result<i64> {
    let n = self
      .conn
      .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
    Ok(n)
  }

  /// Run one raw statement; test-only (e.g. exercising cascades).
  pub(crate) fn exec(&self, sql: &str) -> Result<()> {
    self.conn.execute(sql, [])?;
    Ok(())
  }
}
