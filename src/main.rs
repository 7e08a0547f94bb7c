//! # momento-mori
//!
//! HTTP server for the Momento Mori life expectancy service.
//!
//! ```bash
//! # Serve on the default address with the bundled table
//! momento-mori
//!
//! # Custom address and data file
//! momento-mori --bind 0.0.0.0:8080 --data /srv/momento/life_expectancy.csv
//!
//! # Verbose logs
//! MOMENTO_LOG=momento_mori=debug,tower_http=debug momento-mori
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use momento_mori::MomentoResult;
use momento_mori::config::ServerConfig;
use momento_mori::life_table::LifeTable;
use momento_mori::life_table::life_data::LifeData;
use momento_mori::telemetry::init_tracing;
use momento_mori::web::{AppState, router};
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "momento-mori", version, about = "Life expectancy/Anti Procrastination App")]
struct Cli {
    /// Address to listen on [default: 127.0.0.1:8000]
    #[arg(long, env = "MOMENTO_BIND")]
    bind: Option<SocketAddr>,

    /// Life expectancy CSV file [default: data/life_expectancy.csv]
    #[arg(long, env = "MOMENTO_DATA")]
    data: Option<PathBuf>,

    /// Directory served under /static [default: static]
    #[arg(long = "static-dir", env = "MOMENTO_STATIC")]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> MomentoResult<()> {
    let config = ServerConfig::builder()
        .maybe_bind(cli.bind)
        .maybe_data_path(cli.data)
        .maybe_static_dir(cli.static_dir)
        .build()?;

    // The table must be fully loaded before the listener exists
    let data = LifeData::from_csv(&config.data_path)?;
    let table = LifeTable::builder().data(data).build()?;
    info!(
        rows = table.row_count(),
        max_age = ?table.max_age(),
        source = %table.description,
        "life table ready"
    );

    if !config.static_dir.is_dir() {
        warn!(dir = %config.static_dir.display(), "static directory not found, assets will 404");
    }

    let app = router(AppState::new(table), &config.static_dir);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, version = momento_mori::VERSION, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
