//! Error handling for browserhistory

use thiserror::Error;

/// Main error type for browserhistory operations
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Unsupported platform: {0} (only macOS and Windows are supported)")]
    UnsupportedPlatform(String),

    #[error("{} database permission denied: {source}", .browser.to_uppercase())]
    DatabaseOpen {
        browser: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("{} history table is locked, close the browser and retry", .0.to_uppercase())]
    QueryLocked(String),

    #[error("{browser} history query failed: {source}")]
    Query {
        browser: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for browserhistory operations
pub type Result<T> = std::result::Result<T, HistoryError>;
