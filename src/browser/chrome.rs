//! Chromium-family history database locations

use crate::config::Browser;
use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// File name of the history database inside a Chromium profile.
pub const HISTORY_FILE: &str = "History";

/// Profile directory used when a browser keeps per-profile data.
const DEFAULT_PROFILE: &str = "Default";

struct ChromiumSettings {
    /// Path from the home directory to the browser's user data dir.
    user_data_dir: &'static [&'static str],
    supports_profiles: bool,
}

fn settings(user_data_dir: &'static [&'static str], supports_profiles: bool) -> ChromiumSettings {
    ChromiumSettings {
        user_data_dir,
        supports_profiles,
    }
}

fn chromium_settings(browser: Browser, platform: Platform) -> ChromiumSettings {
    match platform {
        Platform::MacOs => match browser {
            Browser::Chrome => settings(
                &["Library", "Application Support", "Google", "Chrome"],
                true,
            ),
            Browser::Edge => settings(&["Library", "Application Support", "Microsoft Edge"], true),
            Browser::Brave => settings(
                &[
                    "Library",
                    "Application Support",
                    "BraveSoftware",
                    "Brave-Browser",
                ],
                true,
            ),
            Browser::Opera => settings(
                &["Library", "Application Support", "com.operasoftware.Opera"],
                false,
            ),
            Browser::Vivaldi => settings(&["Library", "Application Support", "Vivaldi"], true),
        },
        Platform::Windows => match browser {
            Browser::Chrome => settings(
                &["AppData", "Local", "Google", "Chrome", "User Data"],
                true,
            ),
            Browser::Edge => settings(
                &["AppData", "Local", "Microsoft", "Edge", "User Data"],
                true,
            ),
            Browser::Brave => settings(
                &[
                    "AppData",
                    "Local",
                    "BraveSoftware",
                    "Brave-Browser",
                    "User Data",
                ],
                true,
            ),
            // Opera keeps its profile in the roaming part of AppData.
            Browser::Opera => settings(
                &["AppData", "Roaming", "Opera Software", "Opera Stable"],
                false,
            ),
            Browser::Vivaldi => settings(&["AppData", "Local", "Vivaldi", "User Data"], true),
        },
    }
}

/// Build the history database path for `browser` on `platform` under `home`.
///
/// The path is only constructed; whether it exists is the caller's concern.
pub fn history_path(browser: Browser, platform: Platform, home: &Path) -> PathBuf {
    let settings = chromium_settings(browser, platform);
    let mut path = settings
        .user_data_dir
        .iter()
        .fold(home.to_path_buf(), |acc, part| acc.join(part));
    if settings.supports_profiles {
        path.push(DEFAULT_PROFILE);
    }
    path.push(HISTORY_FILE);
    path
}
