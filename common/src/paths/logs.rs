//! Timestamped log file naming

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// `YY.MM.DD HH:MM`, 24-hour clock. Minute granularity, no extension.
pub const LOG_TIMESTAMP_FORMAT: &str = "%y.%m.%d %H:%M";

/// Joins the formatted timestamp onto `log_directory`. The file name contains a space,
/// so the result must only ever be handled as a single path.
pub fn derive_log_path(log_directory: &Path, timestamp: &NaiveDateTime) -> PathBuf {
    log_directory.join(timestamp.format(LOG_TIMESTAMP_FORMAT).to_string())
}
