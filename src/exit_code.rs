use crate::error::HistoryError;

pub fn exit_code_for_error(err: &HistoryError) -> i32 {
    match err {
        HistoryError::Config(_) => 2,
        HistoryError::UnsupportedPlatform(_) => 4,
        HistoryError::Io(_) | HistoryError::Csv(_) => 23,
        HistoryError::DatabaseOpen { .. }
        | HistoryError::QueryLocked(_)
        | HistoryError::Query { .. } => 43,
    }
}
