//! CSV export of extracted history

use crate::config::OutputConfig;
use crate::error::Result;
use crate::history::{HistoryRecord, HistoryResultSet};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// File name of the CSV written for `browser`
pub fn csv_file_name(browser: &str) -> String {
    format!("{}_history.csv", browser)
}

/// Write `records` as fully quoted CSV rows without a header.
///
/// Returns the number of rows written.
pub fn write_records<W: Write>(records: &[HistoryRecord], writer: W) -> Result<usize> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    for record in records {
        csv_writer.write_record([&record.url, &record.title, &record.last_visit_time])?;
    }
    csv_writer.flush()?;
    Ok(records.len())
}

/// Writes one CSV file per browser into the configured directory
pub struct OutputWriter {
    config: OutputConfig,
}

impl OutputWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write every browser in `history`, including those with no records.
    ///
    /// Returns the written paths ordered by browser name.
    pub fn write_history(&self, history: &HistoryResultSet) -> Result<Vec<PathBuf>> {
        if !history.is_empty() {
            fs::create_dir_all(&self.config.output_dir)?;
        }

        let mut browsers: Vec<&String> = history.keys().collect();
        browsers.sort();

        let mut written = Vec::with_capacity(browsers.len());
        for browser in browsers {
            let path = self.config.output_dir.join(csv_file_name(browser));
            let rows = write_records(&history[browser], File::create(&path)?)?;
            log::info!("Wrote {} {} history rows to {:?}", rows, browser, path);
            written.push(path);
        }
        Ok(written)
    }
}
