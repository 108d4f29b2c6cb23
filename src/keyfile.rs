//! Loading tries from plain-text key files.
//!
//! One entry per line, either `key` or `key<TAB>value`. Blank lines and lines
//! starting with `#` are skipped. A key without an explicit value gets its
//! 1-based line number as value.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::data_structures::lanai_trie::{LanaiTrie, LanaiTrieError};
use crate::error::LanaiResult;

/// Outcome counters for one [`load_keys`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Keys that were new to the trie
    pub inserted: usize,
    /// Keys whose value was overwritten
    pub replaced: usize,
    /// Keys rejected as duplicates or invalid
    pub rejected: usize,
}

/// Splits one line into key and value, or `None` if it carries no entry.
pub fn parse_line(line_no: usize, line: &str) -> Option<(&str, String)> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.starts_with('#') {
        return None;
    }

    match line.split_once('\t') {
        Some((key, value)) => Some((key, value.to_string())),
        None => Some((line, line_no.to_string())),
    }
}

/// Inserts every entry of the file at `path` into `trie`.
///
/// Rejected keys are logged and counted; they never abort the load. Only I/O
/// failures are returned as errors.
pub fn load_keys<P: AsRef<Path>>(
    path: P,
    trie: &mut LanaiTrie<String>,
    replace: bool,
) -> LanaiResult<LoadReport> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let mut report = LoadReport::default();

    for (index, line) in contents.lines().enumerate() {
        let line_no = index + 1;
        let (key, value) = match parse_line(line_no, line) {
            Some(entry) => entry,
            None => continue,
        };

        match trie.insert(key, value, replace) {
            Ok(true) => report.inserted += 1,
            Ok(false) => report.replaced += 1,
            Err(err @ LanaiTrieError::DuplicateKey(_)) => {
                warn!(line = line_no, %err, "skipping duplicate key");
                report.rejected += 1;
            }
            Err(err) => {
                warn!(line = line_no, %err, "skipping invalid key");
                report.rejected += 1;
            }
        }
    }

    info!(
        path = %path.display(),
        inserted = report.inserted,
        replaced = report.replaced,
        rejected = report.rejected,
        "loaded key file"
    );
    Ok(report)
}
