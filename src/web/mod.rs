//! HTTP front end: reading interface, literature catalog and run-code relay.
//!
//! All three share one listener and no mutable state.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080, serving ./static and ./Література
//! literature-server serve
//!
//! # Custom directories and auto-open browser
//! literature-server serve --static-dir site --literature-dir books --open
//!
//! # Bind to all interfaces
//! literature-server serve --address 0.0.0.0
//! ```
//!
//! ## Endpoints
//!
//! - `GET /...` - files from the static directory (`/` serves `index.html`)
//! - `GET /literature/<name>` - raw files from the literature directory
//! - `GET /api/literature` - JSON catalog of the literature directory
//! - `POST /api/run-code` - relayed to the compile service
//! - `OPTIONS /api/run-code` - CORS pre-flight

pub mod config;
pub mod literature;
pub mod proxy;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use server::{create_router, AppState};
