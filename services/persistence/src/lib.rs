//! Replay Log Persistence
//!
//! Provides the append-only JSON-Lines replay log: one complete JSON object
//! per line, written under a single writer lock and flushed before an append
//! returns. Reads scan the whole file start-to-end and absorb malformed
//! lines as named `CorruptLine` outcomes instead of errors.
//!
//! The log is the single source of truth. There is no delete, no truncate
//! and no compaction; every read costs O(total records).

pub mod log;
pub mod scan;
