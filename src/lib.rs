//! Caredesk: a single-session, in-memory clinic registry.
//!
//! Patients, doctors, and appointments live in a [`registry::Registry`] for
//! the life of one console session. Entities validate their own fields at
//! construction and mutation time and reject invalid data immediately; the
//! menu console in [`console`] is a thin collaborator over the entity layer.

pub mod config;
pub mod console;
pub mod models;
pub mod registry;
pub mod validation;

use tracing_subscriber::EnvFilter;

/// Initialises logging and drives one interactive session to completion.
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let mut registry = registry::Registry::new();
    if let Err(e) = console::run(&mut registry) {
        // The only fatal path: an I/O failure in the interactive loop.
        tracing::error!("Console session failed: {e}");
    }
}
