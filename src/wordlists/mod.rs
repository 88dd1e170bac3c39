//! Word catalog for the daily puzzle
//!
//! Provides the embedded catalog compiled into the binary and loaders for
//! user-supplied lists.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{CatalogError, WordCatalog};
pub use embedded::{CATALOG, CATALOG_COUNT};
