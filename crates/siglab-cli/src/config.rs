//! Path layout: where the database and sample data live.
//!
//! Defaults mirror the repository layout (`db/signatures.db`, `data/csv`,
//! `data/images/ir` under the base directory). A TOML config file can
//! override any of them; CLI flags win over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Deserialize;

/// Resolved locations for the database and data trees.
#[derive(Debug, Clone)]
pub struct Paths {
  pub db:      PathBuf,
  pub csv_dir: PathBuf,
  pub ir_dir:  PathBuf,
}

/// Shape of the optional TOML config file. Every field is optional; missing
/// fields fall back to the default layout.
#[derive(Deserialize, Default)]
struct ConfigFile {
  base_dir: Option<PathBuf>,
  db:       Option<PathBuf>,
  csv_dir:  Option<PathBuf>,
  ir_dir:   Option<PathBuf>,
}

impl Paths {
  fn default_under(base: &Path) -> Self {
    Self {
      db:      base.join("db").join("signatures.db"),
      csv_dir: base.join("data").join("csv"),
      ir_dir:  base.join("data").join("images").join("ir"),
    }
  }

  /// Resolve the layout: CLI flags override config-file values, which
  /// override defaults under the base directory.
  pub fn resolve(config: Option<&Path>, base_dir: Option<&Path>) -> Result<Self> {
    let file_cfg: ConfigFile = match config {
      Some(path) => {
        let raw = std::fs::read_to_string(path)
          .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).context("parsing config file")?
      }
      None => ConfigFile::default(),
    };

    let base = base_dir
      .map(Path::to_path_buf)
      .or(file_cfg.base_dir)
      .unwrap_or_else(|| PathBuf::from("."));

    let defaults = Self::default_under(&base);
    Ok(Self {
      db:      file_cfg.db.unwrap_or(defaults.db),
      csv_dir: file_cfg.csv_dir.unwrap_or(defaults.csv_dir),
      ir_dir:  file_cfg.ir_dir.unwrap_or(defaults.ir_dir),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_layout_under_base() {
    let paths = Paths::resolve(None, Some(Path::new("/tmp/lab"))).unwrap();
    assert_eq!(paths.db, Path::new("/tmp/lab/db/signatures.db"));
    assert_eq!(paths.csv_dir, Path::new("/tmp/lab/data/csv"));
    assert_eq!(paths.ir_dir, Path::new("/tmp/lab/data/images/ir"));
  }

  #[test]
  fn base_dir_flag_overrides_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let cfg = dir.path().join("siglab.toml");
    std::fs::write(&cfg, "base_dir = \"/from/file\"\n").unwrap();

    let paths = Paths::resolve(Some(&cfg), Some(Path::new("/from/flag"))).unwrap();
    assert_eq!(paths.db, Path::new("/from/flag/db/signatures.db"));
  }

  #[test]
  fn config_file_overrides_individual_paths() {
    let dir = tempfile::TempDir::new().unwrap();
    let cfg = dir.path().join("siglab.toml");
    std::fs::write(&cfg, "db = \"/elsewhere/sig.db\"\n").unwrap();

    let paths = Paths::resolve(Some(&cfg), None).unwrap();
    assert_eq!(paths.db, Path::new("/elsewhere/sig.db"));
    assert_eq!(paths.csv_dir, Path::new("./data/csv"));
  }
}
