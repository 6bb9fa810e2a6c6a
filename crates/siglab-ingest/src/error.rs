//! Error type for `siglab-ingest`.
//!
//! Only fatal conditions appear here. Non-fatal per-image skips (undecodable
//! file, filename without a ship id) never become errors — they surface as
//! `tracing::warn!` notices and counters on [`crate::IrReport`].

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The CSV source file does not exist. Aborts the current import.
  #[error("source file not found: {0}")]
  SourceNotFound(PathBuf),

  /// A row could not be read or parsed; the whole file's import is aborted
  /// and nothing from it is committed.
  #[error("csv error in {path}: {source}")]
  Csv {
    path:   PathBuf,
    #[source]
    source: csv::Error,
  },

  /// The IR image directory itself could not be listed. Distinct from a
  /// directory with no matching files, which is an empty (Ok) result.
  #[error("cannot list image directory {path}: {source}")]
  DirectoryUnreadable {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  /// The backing store rejected an insert (e.g. a foreign-key violation).
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
  pub(crate) fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Store(Box::new(err))
  }
}
