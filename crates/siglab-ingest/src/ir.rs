//! IR image directory walk: enumerate, decode, extract, batch insert.
//!
//! Pipeline per directory pass:
//!   list image files (lexicographic)
//!     └─ infer ship id from filename   → skip + warn on failure
//!          └─ decode to 8-bit grayscale → skip + warn on failure
//!               └─ IrFeatures::from_pixels → stage one row
//! All staged rows are inserted in a single store call at the end, so one
//! bad image never aborts the others.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use siglab_core::{
  ir::{IrFeatures, infer_ship_id},
  signature::IrFeatureRow,
  store::SignatureStore,
};

use crate::error::{Error, Result};

/// Extensions the walk treats as image files (matched case-insensitively).
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

/// Outcome of one directory pass. Skips are non-fatal; they appear here and
/// as `warn!` notices, nowhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IrReport {
  /// Feature rows inserted.
  pub inserted:            usize,
  /// Files whose name carried no `ship_<digits>_` run.
  pub skipped_unparsable:  usize,
  /// Files that failed to decode as an image.
  pub skipped_undecodable: usize,
}

impl IrReport {
  pub fn skipped(&self) -> usize {
    self.skipped_unparsable + self.skipped_undecodable
  }
}

fn is_image_file(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// List image files directly under `dir` in lexicographic order.
///
/// A missing or unlistable directory is fatal; a listable directory with no
/// matching files is simply an empty result.
fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
  let entries = std::fs::read_dir(dir)
    .map_err(|source| Error::DirectoryUnreadable { path: dir.to_path_buf(), source })?;

  let mut files = Vec::new();
  for entry in entries {
    let entry = entry
      .map_err(|source| Error::DirectoryUnreadable { path: dir.to_path_buf(), source })?;
    let path = entry.path();
    if path.is_file() && is_image_file(&path) {
      files.push(path);
    }
  }
  files.sort();
  Ok(files)
}

/// Process every image in `dir`: one feature row per decodable, well-named
/// file, committed as a single unit.
pub fn process_ir_directory<S: SignatureStore>(store: &mut S, dir: &Path) -> Result<IrReport> {
  let files = list_images(dir)?;
  if files.is_empty() {
    info!(dir = %dir.display(), "no image files found");
    return Ok(IrReport::default());
  }

  let mut report = IrReport::default();
  let mut rows = Vec::with_capacity(files.len());

  for path in &files {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();

    let Some(ship_id) = infer_ship_id(name) else {
      warn!(file = name, "could not infer ship id from filename, skipping");
      report.skipped_unparsable += 1;
      continue;
    };

    let pixels = match image::open(path) {
      Ok(img) => img.to_luma8(),
      Err(err) => {
        warn!(file = name, error = %err, "could not decode image, skipping");
        report.skipped_undecodable += 1;
        continue;
      }
    };

    rows.push(IrFeatureRow {
      ship_id,
      image_path: path.display().to_string(),
      features: IrFeatures::from_pixels(pixels.as_raw()),
    });
  }

  report.inserted = store.insert_ir_features(&rows).map_err(Error::store)?;
  info!(
    inserted = report.inserted,
    skipped = report.skipped(),
    dir = %dir.display(),
    "ir feature pass complete"
  );
  Ok(report)
}
