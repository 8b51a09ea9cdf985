//! browserhistory - export local browser history to CSV
//!
//! This crate finds the history databases of Chromium-family browsers for
//! the current user, reads the visited URLs from them and writes one CSV
//! file per browser.

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod history;
pub mod logging;
pub mod output;
pub mod platform;
pub mod utils;

pub use browser::{locate_browser_databases, BrowserLocator, BrowserPaths};
pub use error::{HistoryError, Result};
pub use history::{extract_history, HistoryRecord, HistoryResultSet};
pub use platform::{resolve_platform, Platform};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
