//! A small sign-up service for extracurricular activities.
//! Activities live in memory, seeded from `config/seed.toml` on startup.

pub mod app;
pub mod config;
mod error;
pub mod model;
pub mod web;

pub use app::{App, AppState};
pub use error::{Error, Result};
pub use web::serve;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Verbose console logging for development.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(EnvFilter::new("debug"))
        .compact()
        .init();
}

/// `RUST_LOG` decides the level, falls back to `info`.
pub fn init_production_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .init();
}
