//! Log scan results — parsed records plus named corrupt-line outcomes
//!
//! A malformed line is not an error: the payload schema is never enforced
//! upstream and a torn write from a crashed process must not take the rest
//! of the history down with it. Each such line becomes a `CorruptLine`
//! entry so callers (and tests) can observe the drop instead of inferring
//! it from absence.

use serde_json::error::Category;
use types::record::Record;

/// One line of the log that failed to parse and was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptLine {
    /// 1-based line number within the file.
    pub line_number: u64,
    /// Parser detail, for diagnostics only.
    pub detail: String,
}

/// The result of scanning the log start-to-end.
///
/// `records` are in log order, which is insertion order — the only ordering
/// the store guarantees. An empty log and a log of only corrupt lines both
/// scan to zero records; no distinction is surfaced.
#[derive(Debug, Default)]
pub struct LogScan {
    pub records: Vec<Record>,
    pub corrupt: Vec<CorruptLine>,
}

impl LogScan {
    /// Parse raw log bytes line by line.
    ///
    /// Every line is parsed independently; blank lines are skipped without
    /// being reported, anything else that is not a complete record becomes
    /// a [`CorruptLine`].
    pub fn parse(bytes: &[u8]) -> Self {
        let mut scan = Self::default();

        for (idx, line) in bytes.split(|&b| b == b'\n').enumerate() {
            let line = line.trim_ascii();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_slice::<Record>(line) {
                Ok(record) => scan.records.push(record),
                Err(err) => scan.corrupt.push(CorruptLine {
                    line_number: idx as u64 + 1,
                    detail: describe(&err),
                }),
            }
        }

        scan
    }
}

fn describe(err: &serde_json::Error) -> String {
    match err.classify() {
        Category::Syntax | Category::Eof => format!("malformed JSON: {err}"),
        Category::Data => format!("not a record object: {err}"),
        Category::Io => format!("unreadable line: {err}"),
    }
}

// ── Tests ───────────────────────────────────────────────────────────
