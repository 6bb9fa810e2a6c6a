//! SQLite backend for the signature store.
//!
//! Wraps [`rusqlite`] directly — the whole pipeline is single-threaded and
//! synchronous, so there is no async shim. One connection per store, one
//! transaction per append call.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
