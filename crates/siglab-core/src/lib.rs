//! Core types and trait definitions for the Maritime Signature Lab.
//!
//! This crate is deliberately free of database, CSV, and image-codec
//! dependencies. All other crates depend on it; it depends only on `serde`.

pub mod ir;
pub mod signature;
pub mod store;
