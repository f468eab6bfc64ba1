//! Analytics Service
//!
//! Stateless read-side computations over the full record sequence. Every
//! function takes the freshly scanned records and derives its view from
//! scratch — no caching, no incremental state, so a query can never drift
//! from the log.
//!
//! ```text
//!            records (log order)
//!                   │
//!    ┌──────────┬───┴──────┬───────────┐
//!    │          │          │           │
//! ┌──▼──────┐ ┌─▼──────┐ ┌─▼───────┐ ┌─▼────────┐
//! │Countries│ │Heatmap │ │ Modes   │ │ Rating   │
//! └─────────┘ └────────┘ └─────────┘ └──────────┘
//! ```
//!
//! Extraction is tolerant throughout: a record, round or player missing any
//! nested field is skipped silently, never an error.

pub mod countries;
pub mod heatmap;
pub mod modes;
pub mod rating;

mod tally;
