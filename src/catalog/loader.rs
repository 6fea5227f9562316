//! Catalog file loading

use super::{Catalog, CatalogError};
use crate::infra::{FileSystem, RealFileSystem};
use std::path::Path;

/// Loads catalog documents from disk
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a catalog file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use velura::catalog::CatalogLoader;
    /// use std::path::Path;
    ///
    /// let catalog = CatalogLoader::load(Path::new("data/catalog.toml"))?;
    /// println!("catalog version {}", catalog.version());
    /// # Ok::<(), velura::catalog::CatalogError>(())
    /// ```
    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load a catalog with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<Catalog, CatalogError> {
        let contents = fs.read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read catalog document from {}", path.display());
        Catalog::from_toml_str(&contents)
    }

    /// Load the catalog at `path`, or the built-in one when no path is given
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Catalog, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Catalog::builtin(),
        }
    }
}
