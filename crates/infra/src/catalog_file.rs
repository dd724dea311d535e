//! Catalog file loading.

use std::path::Path;

use storefront_catalog::{CatalogStore, LoadError};

/// Read and parse the catalog file at `path`.
pub fn read_catalog(path: impl AsRef<Path>) -> Result<CatalogStore, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = CatalogStore::load(&bytes)?;
    tracing::debug!(path = %path.display(), products = catalog.len(), "catalog parsed");
    Ok(catalog)
}
