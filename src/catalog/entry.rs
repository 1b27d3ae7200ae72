use serde::{Deserialize, Serialize};

use crate::catalog::names::{clean_file_name, literature_url};

/// One literature file as shown by the reading interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Human-friendly title derived from `file_name`
    pub display_name: String,
    /// File name on disk, extension included
    pub file_name: String,
    /// Percent-encoded retrieval URL under `/literature/`
    pub url: String,
}

impl CatalogEntry {
    /// Build an entry from a file name. Pure: no filesystem access.
    pub fn from_file_name(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            display_name: clean_file_name(&file_name),
            url: literature_url(&file_name),
            file_name,
        }
    }
}
