use std::{error::Error, process::ExitCode, sync::Arc};

use taskboard_server::{
    app_state::{AppState, SharedState},
    data_access::connection::ConnectionManager,
    map_routes,
    settings::Settings,
};

#[cfg(feature = "profile-console")]
fn init_tracing() {
    console_subscriber::init();
}

#[cfg(not(feature = "profile-console"))]
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env.local wins over .env; real environment wins over both
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    // ── Configuration ──────────────────────────────────────────
    let settings = Settings::load()?;
    let connection = ConnectionManager::new(settings.database_url()?);
    tracing::info!(base_url = %settings.base_url(), "configuration loaded");

    // ── Shared state ───────────────────────────────────────────
    let addr = settings.socket_addr();
    let state: SharedState = Arc::new(AppState::new(settings, connection));

    // ── Start ──────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server running");
    tracing::info!("  Tasks:  GET|POST /tasks, GET|PUT|DELETE /tasks/:id");
    tracing::info!("  Health: GET /health, GET /test-connection");

    axum::serve(listener, map_routes(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
