//! Server configuration, built once at startup and handed to the router.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::cli::ServeArgs;

pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_LITERATURE_DIR: &str = "Література";
pub const DEFAULT_COMPILER_URL: &str = "https://play.golang.org/compile";

pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024; // 20MB
pub const DEFAULT_MAX_CONCURRENCY: usize = 100;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid compiler URL '{url}': {reason}")]
    InvalidCompilerUrl { url: String, reason: String },

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),
}

/// Everything the handlers need to know about their environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Root for the reading interface (HTML/JS/CSS)
    pub static_dir: PathBuf,
    /// Directory listed by the catalog and served under `/literature/`
    pub literature_dir: PathBuf,
    /// Compile service that `/api/run-code` relays to
    pub compiler_url: Url,
    pub upstream_timeout: Duration,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
    pub max_concurrency: usize,
}

impl ServerConfig {
    /// Configuration with default limits for the given directories and service.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCompilerUrl` if `compiler_url` is not an
    /// absolute http(s) URL.
    pub fn new(
        static_dir: impl Into<PathBuf>,
        literature_dir: impl Into<PathBuf>,
        compiler_url: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: static_dir.into(),
            literature_dir: literature_dir.into(),
            compiler_url: parse_compiler_url(compiler_url)?,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        })
    }

    /// Address string suitable for binding, e.g. `127.0.0.1:8080`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    /// Check the limits that would otherwise stall or break the server.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroValue` naming the first zero limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream_timeout.is_zero() {
            return Err(ConfigError::ZeroValue("upstream timeout"));
        }
        if self.connect_timeout.is_zero() {
            return Err(ConfigError::ZeroValue("connect timeout"));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroValue("request timeout"));
        }
        if self.max_concurrency == 0 {
            return Err(ConfigError::ZeroValue("max concurrency"));
        }
        Ok(())
    }
}

impl TryFrom<&ServeArgs> for ServerConfig {
    type Error = ConfigError;

    fn try_from(args: &ServeArgs) -> Result<Self, Self::Error> {
        let config = Self {
            address: args.address.clone(),
            port: args.port,
            static_dir: args.static_dir.clone(),
            literature_dir: args.literature_dir.clone(),
            compiler_url: parse_compiler_url(&args.compiler_url)?,
            upstream_timeout: Duration::from_secs(args.upstream_timeout),
            connect_timeout: Duration::from_secs(args.connect_timeout),
            request_timeout: Duration::from_secs(args.request_timeout),
            max_body_bytes: args.max_body_bytes,
            max_concurrency: args.max_concurrency,
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_compiler_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidCompilerUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
