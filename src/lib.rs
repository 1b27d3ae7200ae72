//! # literature-server
//!
//! A small HTTP server behind a browser-based reading interface.
//!
//! One listener hosts three independent, stateless parts:
//!
//! - **Static files**: the reading interface (HTML/JS/CSS) from a local directory
//! - **Literature catalog**: the files of a literature directory as JSON, each
//!   with a display title derived from its file name
//! - **Run-code relay**: code-run requests forwarded verbatim to an external
//!   compile service, its status and body relayed back
//!
//! ## Example
//!
//! ```rust,no_run
//! use literature_server::web::{create_router, ServerConfig};
//!
//! # async fn serve() -> anyhow::Result<()> {
//! let config = ServerConfig::new("static", "books", "https://play.golang.org/compile")?;
//! let app = create_router(config)?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Directory listing to catalog entries, and title cleaning
//! - [`web`]: Router, handlers, configuration
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::{CatalogEntry, CatalogError};
pub use web::{create_router, ServerConfig};
