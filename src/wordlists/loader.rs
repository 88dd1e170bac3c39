//! Catalog loading utilities
//!
//! Builds a [`WordCatalog`] from the embedded list or from a file.

use super::{CATALOG, CatalogError, WordCatalog};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Failure to produce a catalog from a file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {path} is not a usable catalog")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Build the catalog compiled into the binary
///
/// # Errors
/// Returns `CatalogError` if the embedded list is malformed.
///
/// # Examples
/// ```
/// use daily_wordle::wordlists::loader::embedded_catalog;
///
/// let catalog = embedded_catalog().unwrap();
/// assert!(catalog.contains_text("word"));
/// ```
pub fn embedded_catalog() -> Result<WordCatalog, CatalogError> {
    let catalog = WordCatalog::new(CATALOG.iter().copied())?;
    debug!(words = catalog.len(), "loaded embedded catalog");
    Ok(catalog)
}

/// Load a catalog from a file
///
/// One word per line; surrounding whitespace is trimmed, blank lines and
/// lines starting with `#` are skipped. Everything else must be a valid,
/// unique word of the puzzle length: unlike a guess list, nothing is
/// silently dropped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::Catalog` if its contents do not form a valid catalog.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordCatalog, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = WordCatalog::new(catalog_lines(&content)).map_err(|source| {
        LoadError::Catalog {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(path = %path.display(), words = catalog.len(), "loaded word catalog");
    Ok(catalog)
}

/// The word entries of a catalog file, in order
pub fn catalog_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
