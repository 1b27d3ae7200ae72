use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::entry::CatalogEntry;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read literature directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A direct child of the literature directory, as reported by the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub name: String,
    pub is_dir: bool,
}

impl ListedFile {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Subdirectories and dot-files are not part of the catalog.
    #[must_use]
    pub fn is_listable(&self) -> bool {
        !self.is_dir && !self.name.starts_with('.')
    }
}

/// Map a directory listing to catalog entries, keeping the listing order.
pub fn build_catalog<I>(listing: I) -> Vec<CatalogEntry>
where
    I: IntoIterator<Item = ListedFile>,
{
    listing
        .into_iter()
        .filter(ListedFile::is_listable)
        .map(|file| CatalogEntry::from_file_name(file.name))
        .collect()
}

/// List the direct children of `dir`, sorted by file name.
///
/// Symlinks are reported with their own type, so a link to a directory is
/// listed as a file. Names that are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns `CatalogError::ReadDir` if the directory or any of its entries
/// cannot be read.
pub fn read_listing(dir: &Path) -> Result<Vec<ListedFile>, CatalogError> {
    let read_err = |source| CatalogError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut listing = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let is_dir = entry.file_type().map_err(read_err)?.is_dir();
        match entry.file_name().into_string() {
            Ok(name) => listing.push(ListedFile { name, is_dir }),
            Err(raw) => tracing::warn!("Skipping non UTF-8 file name {:?}", raw),
        }
    }

    listing.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(listing)
}

/// Read `dir` and build its catalog.
///
/// A missing or unreadable directory is an error; an empty one yields an
/// empty catalog.
///
/// # Errors
///
/// Propagates any error from [`read_listing`].
pub fn load_catalog(dir: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    Ok(build_catalog(read_listing(dir)?))
}
