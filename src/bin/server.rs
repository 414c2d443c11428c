use std::{net::SocketAddr, path::PathBuf, process::ExitCode};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fintracker::{AppState, DEFAULT_DB_NAME, StoreConfig, build_router, graceful_shutdown};

const EMBEDDED_STORE_NOTE: &str = "The database is an embedded SQLite file. \
    It has no user, password or host settings: `--db-dir` takes the place of a host \
    and access is controlled by the file's permissions.";

/// The web server for fintracker.
///
/// Every option can also be set with the environment variable shown.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_help = EMBEDDED_STORE_NOTE)]
struct Args {
    /// The name of the SQLite database, stored as `<db-dir>/<db-name>.db`.
    #[arg(long, env = "DB_NAME", default_value = DEFAULT_DB_NAME)]
    db_name: String,

    /// The directory that holds the SQLite database.
    #[arg(long, env = "DB_DIR", default_value = ".")]
    db_dir: PathBuf,

    /// The port to serve the app from.
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();
    let config = StoreConfig::new(&args.db_dir, &args.db_name);

    let state = match AppState::new(config.clone()) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!(
                "Could not set up the database at {}: {error}",
                config.db_path().display()
            );
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Using database {}", config.db_path().display());

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));
    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    tracing::info!("HTTP server listening on http://{addr}");
    let result = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("Server stopped with an error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_log)
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they are handled, so `TraceLayer` does not
        // need to log 5xx responses as well.
        .on_failure(());

    router.layer(tracing_layer)
}
