//! Error type for `siglab-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A foreign-key or uniqueness violation. Aborts the enclosing append
  /// call; nothing from that call is committed.
  #[error("constraint violation: {0}")]
  Constraint(String),

  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  /// Filesystem failure while resetting the database file.
  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
  /// Classify a rusqlite error, surfacing FK/unique failures as
  /// [`Error::Constraint`].
  pub(crate) fn from_sqlite(err: rusqlite::Error) -> Self {
    match &err {
      rusqlite::Error::SqliteFailure(code, msg)
        if code.code == rusqlite::ErrorCode::ConstraintViolation =>
      {
        Error::Constraint(msg.clone().unwrap_or_else(|| code.to_string()))
      }
      _ => Error::Database(err),
    }
  }
}
