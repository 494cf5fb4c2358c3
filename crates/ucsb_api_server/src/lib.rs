//! HTTP surface for the UCSB records API.
//!
//! `build_router` wires the record routes over a shared [`AppState`];
//! `run` is the full process bootstrap used by the `ucsb-api` binary.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;

use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use tokio::net::TcpListener;
use ucsb_api_core::db::{open_db, open_db_in_memory, DbError};
use ucsb_api_core::{init_logging, CredentialError, CredentialStore};

#[derive(Debug)]
pub enum StartupError {
    Config(ConfigError),
    Logging(String),
    Db(DbError),
    Credentials(CredentialError),
    Bind(std::io::Error),
    Serve(std::io::Error),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::Logging(err) => write!(f, "logging init failed: {err}"),
            Self::Db(err) => write!(f, "database open failed: {err}"),
            Self::Credentials(err) => write!(f, "credential load failed: {err}"),
            Self::Bind(err) => write!(f, "bind failed: {err}"),
            Self::Serve(err) => write!(f, "server error: {err}"),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(_) => None,
            Self::Db(err) => Some(err),
            Self::Credentials(err) => Some(err),
            Self::Bind(err) | Self::Serve(err) => Some(err),
        }
    }
}

impl From<ConfigError> for StartupError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<DbError> for StartupError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<CredentialError> for StartupError {
    fn from(value: CredentialError) -> Self {
        Self::Credentials(value)
    }
}

/// Initializes logging, opens storage, loads credentials and serves until
/// Ctrl+C or SIGTERM.
pub async fn run(config: ServerConfig) -> Result<(), StartupError> {
    init_logging(&config.log_level, config.log_dir.as_deref()).map_err(StartupError::Logging)?;
    config.log_summary();

    let conn = match &config.db_path {
        Some(path) => open_db(path)?,
        None => {
            warn!("event=db_open module=server status=ok mode=memory note=\"data is lost on exit\"");
            open_db_in_memory()?
        }
    };

    let credentials = match &config.credentials_path {
        Some(path) => CredentialStore::load(path)?,
        None => {
            warn!("event=credentials_load module=server status=ok users=0 note=\"every guarded call is denied\"");
            CredentialStore::empty()
        }
    };

    let app = build_router(AppState::new(conn, credentials));
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(StartupError::Bind)?;
    let local_addr = listener.local_addr().map_err(StartupError::Bind)?;
    info!("event=server_start module=server status=ok addr={local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("event=shutdown module=server status=start signal=ctrl_c"),
            Err(err) => {
                warn!("event=shutdown module=server status=error signal=ctrl_c error={err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("event=shutdown module=server status=start signal=sigterm");
            }
            Err(err) => {
                warn!("event=shutdown module=server status=error signal=sigterm error={err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
