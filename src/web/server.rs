use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, StatusCode},
    middleware,
    routing::any,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::web::config::ServerConfig;
use crate::web::literature::literature_handler;
use crate::web::proxy::{run_code_cors, run_code_handler, RUN_CODE_PATH};

/// Shared application state
pub struct AppState {
    pub config: ServerConfig,
    /// One pooled client for every relayed request
    pub client: reqwest::Client,
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the tokio runtime cannot
/// be created, or the server fails to start.
pub fn run(args: &ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig::try_from(args)?;
    let open_browser = args.open;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(config, open_browser).await })
}

/// Build the outbound client used for the compile service.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_client(config: &ServerConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("literature-server/", env!("CARGO_PKG_VERSION")))
        .timeout(config.upstream_timeout)
        .connect_timeout(config.connect_timeout)
        .build()
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the outbound HTTP client cannot be built.
pub fn create_router(config: ServerConfig) -> anyhow::Result<Router> {
    let client = build_client(&config)?;

    let static_files = ServeDir::new(&config.static_dir);
    let literature_files = ServeDir::new(&config.literature_dir);
    let request_timeout = config.request_timeout;
    let max_concurrency = config.max_concurrency;
    let max_body_bytes = config.max_body_bytes;

    let state = Arc::new(AppState { config, client });

    let run_code = any(run_code_handler).layer(DefaultBodyLimit::max(max_body_bytes));

    let app = Router::new()
        // Any method, like the run-code route; the catalog ignores the request
        .route("/api/literature", any(literature_handler))
        .route(RUN_CODE_PATH, run_code)
        .nest_service("/literature", literature_files)
        .fallback_service(static_files)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Outermost, so timeouts and limits on run-code carry CORS too
                .layer(middleware::from_fn(run_code_cors))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                // The reading interface frames PDFs from its own origin
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("SAMEORIGIN"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                ))
                .layer(ConcurrencyLimitLayer::new(max_concurrency)),
        );

    Ok(app)
}

fn warn_missing_dirs(config: &ServerConfig) {
    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} does not exist; only the API will answer",
            config.static_dir.display()
        );
    }
    if !config.literature_dir.is_dir() {
        tracing::warn!(
            "Literature directory {} does not exist; the catalog will report errors",
            config.literature_dir.display()
        );
    }
}

async fn run_server(config: ServerConfig, open_browser: bool) -> anyhow::Result<()> {
    warn_missing_dirs(&config);

    let addr = config.bind_addr();
    tracing::info!(
        "Relaying /api/run-code to {}",
        config.compiler_url.as_str()
    );
    let app = create_router(config)?;

    let listener = TcpListener::bind(&addr).await?;
    let local = listener.local_addr()?;
    tracing::info!("Server started on http://{local}");
    tracing::info!("Open http://{local}/index.html");

    if open_browser {
        let _ = open::that(format!("http://{local}/index.html"));
    }

    axum::serve(listener, app).await?;

    Ok(())
}
