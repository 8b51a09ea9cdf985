//! Logging initialization utilities.

use env_logger::Env;

/// Initialize logging with a default filter level.
///
/// `RUST_LOG` still takes precedence over the level chosen here.
pub fn init(default_level: &str) {
    let env = Env::default().default_filter_or(default_level);
    // A second initialization (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Pick the default filter from the verbosity flags.
pub fn default_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::default_level;

    #[test]
    fn default_level_prefers_quiet() {
        assert_eq!(default_level(false, false), "info");
        assert_eq!(default_level(true, false), "debug");
        assert_eq!(default_level(true, true), "error");
    }
}
