//! Feedback Hub API server

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use feedback_hub_api::{router, AppState};
use feedback_hub_config::{AppConfig, ObservabilityConfig};
use feedback_hub_service::{FeedbackService, StaticTokenVerifier};
use feedback_hub_store::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "feedback-hub",
    version,
    about = "Feedback Hub - HTTP API for collecting user feedback and rolling analytics"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "FEEDBACK_CONFIG_FILE", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config).context("loading configuration")?;
    config.validate().context("validating configuration")?;

    init_tracing(&config.observability, cli.verbose);

    let store = Arc::new(JsonFileStore::new(config.storage.data_dir.clone()));
    store
        .initialize()
        .await
        .context("initializing document storage")?;
    info!(data_dir = %config.storage.data_dir.display(), "Storage initialized");

    let verifier = Arc::new(StaticTokenVerifier::new(config.auth.admin_token.clone()));
    let service = Arc::new(FeedbackService::new(store, verifier));
    let state = AppState::new(service, config.service.name.clone());
    let app = router(state, &config.service);

    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port)
        .parse()
        .context("parsing bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, service = %config.service.name, "Feedback Hub API listening");
    info!("Health check: http://{addr}/health");
    info!("Feedback endpoint: http://{addr}/api/feedback");
    info!("Analytics endpoint: http://{addr}/api/analytics");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("serving HTTP")?;

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(config: &ObservabilityConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(config.log_level.clone())
    };

    if config.json_logging {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}
