//! swatchdeck - terminal color explorer
//!
//! Glue around the [`color_engine`] crate: catalog loading, query
//! routing, swatch reporting and CSV export.
//! This library exposes modules for integration testing.

pub mod catalog_csv;
pub mod error;
pub mod export;
pub mod report;
