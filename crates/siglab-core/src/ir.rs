//! Pure IR feature math: fixed-threshold pixel counting and filename →
//! ship-id inference. Image decoding lives in `siglab-ingest`; this module
//! only sees raw 8-bit grayscale buffers.

/// Pixels strictly above this 8-bit value count as hotspots.
pub const HOTSPOT_THRESHOLD: u8 = 200;

/// Pixels strictly above this 8-bit value count toward the silhouette area.
pub const SILHOUETTE_THRESHOLD: u8 = 50;

/// Scalar features derived from one grayscale IR image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IrFeatures {
  /// Mean pixel intensity over the whole image.
  pub mean_intensity: f64,
  /// Number of pixels above [`HOTSPOT_THRESHOLD`].
  pub hotspot_count:  u32,
  /// Number of pixels above [`SILHOUETTE_THRESHOLD`], approximating the
  /// object's visible extent.
  pub area_px:        u32,
}

impl IrFeatures {
  /// Compute features over raw 8-bit grayscale pixels in one pass.
  ///
  /// An empty buffer yields all-zero features.
  pub fn from_pixels(pixels: &[u8]) -> Self {
    if pixels.is_empty() {
      return Self::default();
    }

    let mut sum: u64 = 0;
    let mut hotspot_count: u32 = 0;
    let mut area_px: u32 = 0;

    for &p in pixels {
      sum += u64::from(p);
      if p > HOTSPOT_THRESHOLD {
        hotspot_count += 1;
      }
      if p > SILHOUETTE_THRESHOLD {
        area_px += 1;
      }
    }

    Self {
      mean_intensity: sum as f64 / pixels.len() as f64,
      hotspot_count,
      area_px,
    }
  }
}

/// Infer a ship id from a filename like `ship_007_view_002.png`.
///
/// Matches `ship_<digits>_` anywhere in the name, case-insensitively; the
/// digits must be followed by another underscore. Returns `None` when no
/// such run exists.
pub fn infer_ship_id(filename: &str) -> Option<i64> {
  let lower = filename.to_ascii_lowercase();
  let mut rest = lower.as_str();

  while let Some(pos) = rest.find("ship_") {
    let tail = &rest[pos + 5..];
    let digit_len = tail.bytes().take_while(u8::is_ascii_digit).count();

    if digit_len > 0 && tail[digit_len..].starts_with('_') {
      if let Ok(id) = tail[..digit_len].parse::<i64>() {
        return Some(id);
      }
    }
    rest = tail;
  }
  None
}

// ─── Tests ───────────────────────────────────────────────────────────────────
