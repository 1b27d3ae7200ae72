//! Literature catalog: the list of readable files offered by the interface.
//!
//! The catalog is rebuilt from the literature directory on every request and
//! never cached, so files added or removed show up on the next read.
//!
//! Each direct child of the directory that is neither a subdirectory nor a
//! dot-file becomes a [`CatalogEntry`] with:
//!
//! - `displayName`: a title derived from the file name (see [`names::clean_file_name`])
//! - `fileName`: the name on disk
//! - `url`: `/literature/` followed by the percent-encoded file name
//!
//! ## Example
//!
//! ```rust
//! use literature_server::catalog::{build_catalog, ListedFile};
//!
//! let catalog = build_catalog(vec![
//!     ListedFile::file(".gitkeep"),
//!     ListedFile::file("2_Data_Structures.pdf"),
//! ]);
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog[0].display_name, "Data Structures");
//! assert_eq!(catalog[0].url, "/literature/2_Data_Structures.pdf");
//! ```

pub mod entry;
pub mod listing;
pub mod names;

pub use entry::CatalogEntry;
pub use listing::{build_catalog, load_catalog, read_listing, CatalogError, ListedFile};
