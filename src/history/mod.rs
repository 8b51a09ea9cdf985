//! Browser history extraction
//!
//! Each located database is opened read-only and queried on its own. A
//! database that cannot be opened is left out of the result; a database whose
//! query fails is kept with whatever rows were read (normally none), so the
//! remaining browsers are always processed.

use crate::browser::BrowserPaths;
use crate::error::{HistoryError, Result};
use rusqlite::{Connection, ErrorCode, OpenFlags, Row};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Seconds between the WebKit epoch (1601-01-01) and the Unix epoch.
pub const WEBKIT_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

const HISTORY_QUERY: &str = "SELECT url, title, \
     datetime((last_visit_time/1000000)-11644473600, 'unixepoch', 'localtime') AS last_visit_time \
     FROM urls ORDER BY last_visit_time DESC";

/// One visited URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub url: String,
    pub title: String,
    /// Local time formatted as `YYYY-MM-DD HH:MM:SS`
    pub last_visit_time: String,
}

/// Browser name to its records, most recent visit first
pub type HistoryResultSet = HashMap<String, Vec<HistoryRecord>>;

/// Convert Unix seconds to the microsecond WebKit timestamps Chromium stores.
pub fn webkit_timestamp(unix_secs: i64) -> i64 {
    (unix_secs + WEBKIT_EPOCH_OFFSET_SECS) * 1_000_000
}

/// Read the history of every browser in `paths`.
///
/// Never fails as a whole: per-browser failures are logged and isolated.
pub fn extract_history(paths: &BrowserPaths) -> HistoryResultSet {
    let mut history = HistoryResultSet::new();
    let mut browsers: Vec<&String> = paths.keys().collect();
    browsers.sort();

    for browser in browsers {
        let path = &paths[browser];
        match read_browser_history(browser, path) {
            Ok(records) => {
                log::debug!("Read {} {} history records", records.len(), browser);
                history.insert(browser.clone(), records);
            }
            Err(err) => {
                log::warn!("* {} Database Permission Denied.", browser.to_uppercase());
                log::debug!("{}", err);
            }
        }
    }

    history
}

/// Open and query one database.
///
/// Only an open failure is returned as an error; query failures are
/// reported here and turn into an empty or partial record list.
pub fn read_browser_history(browser: &str, path: &Path) -> Result<Vec<HistoryRecord>> {
    let conn = open_history_db(browser, path)?;
    let mut records = Vec::new();

    if let Err(source) = query_history(&conn, &mut records) {
        match classify_query_error(browser, source) {
            HistoryError::QueryLocked(_) => {
                log::warn!("* Notification *");
                log::warn!("Please Completely Close {} Window", browser.to_uppercase());
                records.clear();
            }
            err => log::error!("{}", err),
        }
    }

    // Statement is already finalized; the connection closes on drop.
    Ok(records)
}

fn open_history_db(browser: &str, path: &Path) -> Result<Connection> {
    let open_error = |source| HistoryError::DatabaseOpen {
        browser: browser.to_string(),
        source,
    };
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(open_error)?;
    // A busy database is reported, not waited on.
    conn.busy_timeout(Duration::ZERO).map_err(open_error)?;
    Ok(conn)
}

fn query_history(conn: &Connection, records: &mut Vec<HistoryRecord>) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare(HISTORY_QUERY)?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        records.push(row_to_record(row)?);
    }
    Ok(())
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<HistoryRecord> {
    let url: Option<String> = row.get(0)?;
    let title: Option<String> = row.get(1)?;
    let last_visit_time: Option<String> = row.get(2)?;
    Ok(HistoryRecord {
        url: url.unwrap_or_default(),
        title: title.unwrap_or_default(),
        last_visit_time: last_visit_time.unwrap_or_default(),
    })
}

fn classify_query_error(browser: &str, source: rusqlite::Error) -> HistoryError {
    match source.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => {
            HistoryError::QueryLocked(browser.to_string())
        }
        _ => HistoryError::Query {
            browser: browser.to_string(),
            source,
        },
    }
}
