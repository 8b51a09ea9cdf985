//! Configuration management for browserhistory

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{HistoryError, Result};

/// Browsers whose history database uses the Chromium `urls` schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Browser {
    Chrome,
    Edge,
    Brave,
    Opera,
    Vivaldi,
}

impl Browser {
    /// Every browser the locator knows a path rule for.
    pub const ALL: [Browser; 5] = [
        Browser::Chrome,
        Browser::Edge,
        Browser::Brave,
        Browser::Opera,
        Browser::Vivaldi,
    ];

    /// Key used in result maps and as the CSV file stem.
    pub fn name(self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
            Browser::Brave => "brave",
            Browser::Opera => "opera",
            Browser::Vivaldi => "vivaldi",
        }
    }

    /// Parse a user-supplied browser name.
    pub fn parse(input: &str) -> Result<Self> {
        input
            .parse::<Browser>()
            .map_err(|_| HistoryError::Config(format!("Unsupported browser: {}", input)))
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Browser {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chrome" | "chromium" => Ok(Browser::Chrome),
            "edge" => Ok(Browser::Edge),
            "brave" => Ok(Browser::Brave),
            "opera" => Ok(Browser::Opera),
            "vivaldi" => Ok(Browser::Vivaldi),
            _ => Err(()),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    pub browsers: Vec<Browser>,
    /// Overrides the home directory the locator searches under.
    pub home_dir: Option<PathBuf>,
    pub output: OutputConfig,
    pub verbose: bool,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            browsers: Browser::ALL.to_vec(),
            home_dir: None,
            output: OutputConfig {
                output_dir: PathBuf::from("."),
            },
            verbose: false,
            quiet: false,
        }
    }
}
