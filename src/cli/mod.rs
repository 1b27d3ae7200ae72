//! Command-line interface for literature-server.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **serve**: Start the web server
//! - **catalog**: Print the literature catalog the server would return
//!
//! ## Usage
//!
//! ```text
//! # Serve ./static and ./Література on port 8080
//! literature-server serve
//!
//! # Relay run-code requests elsewhere, with a shorter timeout
//! literature-server serve --compiler-url http://localhost:9000/compile --upstream-timeout 10
//!
//! # Inspect the catalog as JSON
//! literature-server catalog --literature-dir books --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::web::config::{
    DEFAULT_COMPILER_URL, DEFAULT_LITERATURE_DIR, DEFAULT_MAX_BODY_BYTES,
    DEFAULT_MAX_CONCURRENCY, DEFAULT_STATIC_DIR,
};

pub mod catalog;

#[derive(Parser)]
#[command(name = "literature-server")]
#[command(version)]
#[command(about = "Serve a literature reading interface with a code-run relay")]
#[command(
    long_about = "literature-server serves a static reading interface, lists the files of a literature directory as a JSON catalog, and relays code-run requests to an external compile service."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(ServeArgs),

    /// Print the literature catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Directory with the reading interface (index.html, JS, CSS)
    #[arg(long, default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// Directory whose files make up the catalog
    #[arg(long, default_value = DEFAULT_LITERATURE_DIR)]
    pub literature_dir: PathBuf,

    /// Compile service that run-code requests are relayed to
    #[arg(long, default_value = DEFAULT_COMPILER_URL)]
    pub compiler_url: String,

    /// Seconds to wait for the compile service, body included
    #[arg(long, default_value = "30")]
    pub upstream_timeout: u64,

    /// Seconds to wait for a connection to the compile service
    #[arg(long, default_value = "10")]
    pub connect_timeout: u64,

    /// Seconds before an inbound request is answered with 408
    #[arg(long, default_value = "60")]
    pub request_timeout: u64,

    /// Largest run-code request body accepted, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Maximum number of requests handled at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
