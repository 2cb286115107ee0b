//! CLI command implementations

pub mod add;
pub mod admin;
pub mod browse;
pub mod dashboard;
pub mod demo;
pub mod login;
pub mod logout;
pub mod logs;
pub mod redeem;
pub mod register;
pub mod request;
pub mod show;
pub mod status;
pub mod swaps;
pub mod whoami;

use std::path::PathBuf;

use anyhow::{Context, Result};
use rewear_core::{EntryPoint, LogEvent, LoggingService, ReWearContext};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let rewear_dir = get_rewear_dir();
    std::fs::create_dir_all(&rewear_dir).ok()?;
    LoggingService::new(&rewear_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the rewear directory from environment or default
pub fn get_rewear_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("REWEAR_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".rewear")
    }
}

/// Get or create the rewear context
pub fn get_context() -> Result<ReWearContext> {
    let rewear_dir = get_rewear_dir();

    std::fs::create_dir_all(&rewear_dir)
        .with_context(|| format!("Failed to create rewear directory: {:?}", rewear_dir))?;

    ReWearContext::new(&rewear_dir).context("Failed to initialize rewear context")
}
