use std::error::Error;
use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_router::config::ServerConfig;
use transit_router::requests::{RequestHandler, process_document};
use transit_router::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so `process` output stays clean JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match std::env::args().nth(1).as_deref() {
        Some("process") => process_stdin(),
        Some(other) => Err(format!("unknown command: {other}").into()),
        None => serve().await,
    }
}

/// Answer the stat requests of a document read from stdin.
fn process_stdin() -> Result<(), Box<dyn Error>> {
    let responses = process_document(std::io::stdin().lock())?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &responses)?;
    writeln!(stdout)?;
    Ok(())
}

/// Load the configured network and serve it over HTTP.
async fn serve() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env()?;

    let handler = RequestHandler::from_file(&config.network_file, &config.cache)?;
    let app = create_router(AppState::new(handler));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Transit router listening");
    info!("  GET  /health               - Health check");
    info!("  GET  /route?from=..&to=..  - Fastest itinerary");
    info!("  GET  /bus/:name            - Bus statistics");
    info!("  GET  /stop/:name           - Buses serving a stop");
    info!("  POST /requests             - Batch of stat requests");

    axum::serve(listener, app).await?;
    Ok(())
}
