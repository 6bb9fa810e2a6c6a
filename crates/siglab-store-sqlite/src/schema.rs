//! SQL schema for the signature store.
//!
//! Executed at every open via `execute_batch`; idempotent thanks to
//! `CREATE TABLE IF NOT EXISTS`. The `foreign_keys` pragma is per-connection
//! and must run here, not only at creation time.

pub const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS ships (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

-- Signature tables are strictly append-only: ingestion never issues an
-- UPDATE or DELETE, so re-importing a file duplicates its rows.
CREATE TABLE IF NOT EXISTS acoustic_signatures (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    ship_id    INTEGER NOT NULL REFERENCES ships(id) ON DELETE CASCADE,
    band_label TEXT    NOT NULL,
    level_db   REAL    NOT NULL
);

CREATE TABLE IF NOT EXISTS magnetic_signatures (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    ship_id  INTEGER NOT NULL REFERENCES ships(id) ON DELETE CASCADE,
    axis     TEXT    NOT NULL,
    value_nt REAL    NOT NULL
);

CREATE TABLE IF NOT EXISTS rcs_signatures (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    ship_id    INTEGER NOT NULL REFERENCES ships(id) ON DELETE CASCADE,
    aspect_deg REAL    NOT NULL,
    rcs_dbsm   REAL    NOT NULL
);

-- Populated at runtime by the IR feature extractor; one write-once row per
-- processed image.
CREATE TABLE IF NOT EXISTS ir_features (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    ship_id        INTEGER NOT NULL REFERENCES ships(id) ON DELETE CASCADE,
    image_path     TEXT    NOT NULL,
    mean_intensity REAL    NOT NULL,
    hotspot_count  INTEGER NOT NULL,
    area_px        INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS acoustic_ship_idx ON acoustic_signatures(ship_id);
CREATE INDEX IF NOT EXISTS magnetic_ship_idx ON magnetic_signatures(ship_id);
CREATE INDEX IF NOT EXISTS rcs_ship_idx      ON rcs_signatures(ship_id);
CREATE INDEX IF NOT EXISTS ir_ship_idx       ON ir_features(ship_id);
";
