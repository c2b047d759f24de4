//! Hotel Management Server
//!
//! REST JSON API for booking hotel rooms and facilities: availability and
//! pricing rules, status tracking, inventory administration and guest
//! accounts.

use std::sync::Arc;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use crate::config::LoggingConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Install the global subscriber.
///
/// Stdout uses the configured format; when a log directory is set, JSON
/// records are also written to a daily-rolling file. Keep the returned
/// guard alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("hotel_server={},tower_http=debug", config.level).into())
    };

    let stdout_layer = match config.format.as_str() {
        "json" => fmt::layer().json().with_filter(filter()).boxed(),
        _ => fmt::layer().with_filter(filter()).boxed(),
    };

    let (file_layer, guard) = match config.directory.as_deref() {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "hotel-server.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(true)
                .json()
                .with_writer(non_blocking)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}
