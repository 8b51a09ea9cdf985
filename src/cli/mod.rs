//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and application entry point.

use crate::browser::BrowserLocator;
use crate::config::{Browser, Config};
use crate::error::Result;
use crate::exit_code::exit_code_for_error;
use crate::history::extract_history;
use crate::logging;
use crate::output::OutputWriter;
use crate::platform::resolve_platform;
use crate::utils::FileUtils;
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Main entry point for the CLI application
pub fn run() {
    let matches = create_app().get_matches();
    logging::init(logging::default_level(
        matches.get_flag("verbose"),
        matches.get_flag("quiet"),
    ));

    if let Err(e) = run_with_args(&matches) {
        eprintln!("browserhistory: error: {}", e);
        std::process::exit(exit_code_for_error(&e));
    }
}

/// Run the export with parsed command line arguments
fn run_with_args(matches: &ArgMatches) -> Result<()> {
    let config = build_config_from_args(matches)?;
    let platform = resolve_platform()?;

    let locator = match &config.home_dir {
        Some(home) => BrowserLocator::new(home.clone()),
        None => BrowserLocator::from_home_dir()?,
    }
    .with_browsers(config.browsers.iter().copied());

    let paths = locator.locate(platform);
    if paths.is_empty() {
        log::info!(
            "No browser history databases found under {:?}",
            locator.home()
        );
        return Ok(());
    }

    let history = extract_history(&paths);
    OutputWriter::new(config.output).write_history(&history)?;
    Ok(())
}

/// Create the CLI application structure
pub fn create_app() -> Command {
    Command::new("browserhistory")
        .version(crate::VERSION)
        .about("Export local browser history databases to CSV")
        .arg(
            Arg::new("browser")
                .short('b')
                .long("browser")
                .value_name("BROWSER")
                .help("Only export this browser (chrome, edge, brave, opera, vivaldi)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Directory the CSV files are written to")
                .default_value("."),
        )
        .arg(
            Arg::new("home")
                .long("home")
                .value_name("DIR")
                .env("BROWSERHISTORY_HOME")
                .help("Search for browser data under this home directory"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only report errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
}

/// Build configuration from command line arguments
pub fn build_config_from_args(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::default();

    if let Some(names) = matches.get_many::<String>("browser") {
        config.browsers = names
            .map(|name| Browser::parse(name))
            .collect::<Result<Vec<_>>>()?;
    }

    if let Some(output_dir) = matches.get_one::<String>("output-dir") {
        let output_dir = FileUtils::expand_path(output_dir)?;
        FileUtils::check_output_dir(&output_dir)?;
        config.output.output_dir = output_dir;
    }

    if let Some(home) = matches.get_one::<String>("home") {
        config.home_dir = Some(FileUtils::expand_path(home)?);
    }

    config.verbose = matches.get_flag("verbose");
    config.quiet = matches.get_flag("quiet");

    Ok(config)
}
