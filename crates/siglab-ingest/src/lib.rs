//! Flat-file ingestion for the Maritime Signature Lab.
//!
//! Two paths into the store: typed CSV import (one loader per table, plus
//! [`import_all`] in foreign-key-safe order) and the IR image directory walk
//! ([`process_ir_directory`]). Pure synchronous; generic over any
//! [`siglab_core::store::SignatureStore`].

pub mod error;
pub mod ir;
pub mod loaders;

pub use error::{Error, Result};
pub use ir::{IrReport, process_ir_directory};
pub use loaders::{
  ImportCounts, import_acoustic, import_all, import_magnetic, import_rcs,
  import_ships,
};
