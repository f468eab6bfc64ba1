//! Replay Log — append-only JSON-Lines record store
//!
//! Features:
//! - One self-contained JSON object per line, newline terminated
//! - Appends serialized through a single writer lock (no interleaved lines)
//! - Write + flush inside the critical section; the record is on its way to
//!   the OS before `append` returns
//! - Whole-file scans that drop malformed lines as named outcomes
//! - No delete, no truncate, no compaction

use crate::scan::LogScan;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use types::record::Record;

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ── Replay Log ──────────────────────────────────────────────────────

/// Handle to the append-only replay log.
///
/// Constructed once at startup and shared by `Arc`; the file handle and its
/// lock live here rather than in ambient global state. Appends take the
/// lock for the whole serialize-write-flush sequence, so two records can
/// never interleave within a line. Reads open the file independently and
/// may run concurrently with an in-flight append: a reader may or may not
/// see the newest record, but never a torn line.
pub struct ReplayLog {
    path: PathBuf,
    writer: Mutex<File>,
}

impl ReplayLog {
    /// Open (or create) the log at `path`, creating parent directories as
    /// needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            writer: Mutex::new(file),
        })
    }

    /// The file backing this log.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a single JSON line and flush it.
    ///
    /// The line is assembled in memory first and handed to the file in one
    /// `write_all` under the lock; serde escapes embedded newlines, so the
    /// line terminator written here is the only one on the line.
    pub fn append(&self, record: &Record) -> Result<(), StoreError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut file = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        file.write_all(&line)?;
        file.flush()?;
        Ok(())
    }

    /// Scan the log start-to-end.
    ///
    /// Returns every parseable record in insertion order plus a
    /// [`crate::scan::CorruptLine`] entry per dropped line. A log file that
    /// does not exist yet scans as empty.
    pub fn read_all(&self) -> Result<LogScan, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(LogScan::default()),
            Err(err) => return Err(err.into()),
        };
        Ok(LogScan::parse(&bytes))
    }

    /// Force durability (used before shutdown).
    pub fn sync(&self) -> Result<(), StoreError> {
        let file = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        file.sync_all()?;
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn open_log(tmp: &TempDir) -> ReplayLog {
        ReplayLog::open(tmp.path().join("replays.jsonl")).unwrap()
    }

    #[test]
    fn append_then_read_roundtrips() {
        let tmp = TempDir::new().unwrap();
        let log = open_log(&tmp);

        let payload = json!({"game": {"gameId": "g1", "rounds": []}});
        log.append(&Record::new(100, payload.clone())).unwrap();

        let scan = log.read_all().unwrap();
        assert_eq!(scan.records.len(), 1);
        assert_eq!(scan.records[0].received_at, 100);
        assert_eq!(scan.records[0].payload, payload);
        assert!(scan.corrupt.is_empty());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let tmp = TempDir::new().unwrap();
        let log = open_log(&tmp);

        for i in 0..50 {
            log.append(&Record::new(i, json!({"n": i}))).unwrap();
        }

        let scan = log.read_all().unwrap();
        let order: Vec<i64> = scan.records.iter().map(|r| r.received_at).collect();
        assert_eq!(order, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let tmp = TempDir::new().unwrap();
        let log = ReplayLog {
            path: tmp.path().join("never-created.jsonl"),
            writer: Mutex::new(File::create(tmp.path().join("other")).unwrap()),
        };
        let scan = log.read_all().unwrap();
        assert!(scan.records.is_empty());
        assert!(scan.corrupt.is_empty());
    }

    #[test]
    fn reopening_appends_rather_than_truncates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("replays.jsonl");

        let first = ReplayLog::open(&path).unwrap();
        first.append(&Record::new(1, json!({"a": 1}))).unwrap();
        drop(first);

        let second = ReplayLog::open(&path).unwrap();
        second.append(&Record::new(2, json!({"b": 2}))).unwrap();

        let scan = second.read_all().unwrap();
        assert_eq!(scan.records.len(), 2);
        assert_eq!(scan.records[0].received_at, 1);
        assert_eq!(scan.records[1].received_at, 2);
    }

    #[test]
    fn payload_with_embedded_newlines_stays_on_one_line() {
        let tmp = TempDir::new().unwrap();
        let log = open_log(&tmp);

        log.append(&Record::new(1, json!({"note": "line one\nline two"})))
            .unwrap();
        log.append(&Record::new(2, json!({"ok": true}))).unwrap();

        let raw = fs::read_to_string(log.path()).unwrap();
        assert_eq!(raw.lines().count(), 2);

        let scan = log.read_all().unwrap();
        assert_eq!(scan.records.len(), 2);
        assert_eq!(scan.records[0].payload["note"], "line one\nline two");
    }

    #[test]
    fn corrupt_line_is_dropped_and_reported() {
        let tmp = TempDir::new().unwrap();
        let log = open_log(&tmp);
        log.append(&Record::new(1, json!({"good": true}))).unwrap();

        // Simulate a torn write from a crashed process.
        {
            let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
            file.write_all(b"{\"receivedAt\": 2, \"payl").unwrap();
            file.write_all(b"\n").unwrap();
        }
        log.append(&Record::new(3, json!({"also": "good"}))).unwrap();

        let scan = log.read_all().unwrap();
        assert_eq!(scan.records.len(), 2);
        assert_eq!(scan.corrupt.len(), 1);
        assert_eq!(scan.corrupt[0].line_number, 2);
    }

    #[test]
    fn concurrent_appends_never_interleave() {
        let tmp = TempDir::new().unwrap();
        let log = Arc::new(open_log(&tmp));

        let threads = 8;
        let per_thread = 25;
        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    for i in 0..per_thread {
                        let payload = json!({
                            "game": {"gameId": format!("t{t}-{i}")},
                            "filler": "x".repeat(512),
                        });
                        log.append(&Record::new(i64::from(t * 1_000 + i), payload)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let scan = log.read_all().unwrap();
        assert_eq!(scan.records.len(), (threads * per_thread) as usize);
        assert!(scan.corrupt.is_empty(), "interleaved write corrupted a line");
    }

    // ── Property tests ──────────────────────────────────────────────

    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            proptest::collection::vec(any::<char>(), 0..8)
                .prop_map(|chars| Value::from(chars.into_iter().collect::<String>())),
        ];
        leaf.prop_recursive(3, 24, 6, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                proptest::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                    .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn arbitrary_payloads_roundtrip_in_order(
            payloads in proptest::collection::vec(json_value(), 0..12)
        ) {
            let tmp = TempDir::new().unwrap();
            let log = open_log(&tmp);

            for (i, payload) in payloads.iter().enumerate() {
                log.append(&Record::new(i as i64, payload.clone())).unwrap();
            }

            let scan = log.read_all().unwrap();
            prop_assert!(scan.corrupt.is_empty());
            prop_assert_eq!(scan.records.len(), payloads.len());
            for (i, payload) in payloads.iter().enumerate() {
                prop_assert_eq!(scan.records[i].received_at, i as i64);
                prop_assert_eq!(&scan.records[i].payload, payload);
            }
        }
    }
}
