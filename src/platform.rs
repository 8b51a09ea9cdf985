//! Host platform detection

use std::fmt;

use crate::error::{HistoryError, Result};

/// Operating systems with a known browser data layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    Windows,
}

impl Platform {
    /// Map an OS identifier to a platform.
    ///
    /// Accepts Rust's `std::env::consts::OS` values as well as the
    /// `darwin`/`win32`/`cygwin` spellings other runtimes report.
    pub fn from_os_name(os: &str) -> Result<Self> {
        match os {
            "macos" | "darwin" => Ok(Platform::MacOs),
            "windows" | "win32" | "cygwin" => Ok(Platform::Windows),
            other => Err(HistoryError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Platform of the running process.
    pub fn current() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::MacOs => "macOS",
            Platform::Windows => "Windows",
        };
        write!(f, "{}", name)
    }
}

/// Resolve the platform this process is running on.
pub fn resolve_platform() -> Result<Platform> {
    let platform = Platform::current()?;
    log::debug!("Resolved platform: {}", platform);
    Ok(platform)
}
