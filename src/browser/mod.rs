//! Browser history database discovery
//!
//! This module maps a platform and a home directory to the history
//! databases of the installed browsers.

use crate::config::Browser;
use crate::error::{HistoryError, Result};
use crate::platform::Platform;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub mod chrome;

/// Browser name to history database path
pub type BrowserPaths = HashMap<String, PathBuf>;

/// Finds history databases under a home directory
#[derive(Debug, Clone)]
pub struct BrowserLocator {
    home: PathBuf,
    browsers: Vec<Browser>,
}

impl BrowserLocator {
    /// Create a locator for every known browser under `home`
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            browsers: Browser::ALL.to_vec(),
        }
    }

    /// Create a locator rooted at the current user's home directory
    pub fn from_home_dir() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| HistoryError::Config("Cannot determine home directory".to_string()))?;
        Ok(Self::new(home))
    }

    /// Restrict the search to `browsers`
    pub fn with_browsers(mut self, browsers: impl IntoIterator<Item = Browser>) -> Self {
        self.browsers = browsers.into_iter().collect();
        self.browsers.sort_unstable();
        self.browsers.dedup();
        self
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Every constructed candidate path, whether or not it exists
    pub fn candidates(&self, platform: Platform) -> Vec<(Browser, PathBuf)> {
        self.browsers
            .iter()
            .map(|browser| {
                (
                    *browser,
                    chrome::history_path(*browser, platform, &self.home),
                )
            })
            .collect()
    }

    /// Candidate paths that exist on disk
    pub fn locate(&self, platform: Platform) -> BrowserPaths {
        let mut paths = BrowserPaths::new();
        for (browser, path) in self.candidates(platform) {
            if path.exists() {
                log::debug!("Found {} history database at {:?}", browser, path);
                paths.insert(browser.name().to_string(), path);
            } else {
                log::debug!("No {} history database at {:?}", browser, path);
            }
        }
        paths
    }
}

/// Locate the history databases of installed browsers for the current user
pub fn locate_browser_databases(platform: Platform) -> Result<BrowserPaths> {
    Ok(BrowserLocator::from_home_dir()?.locate(platform))
}
