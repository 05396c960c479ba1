//! # Persistence Module
//!
//! Durable storage for the activity ledger: the record collection and the
//! last-reset date marker.
//!
//! ## Storage Location
//!
//! ```text
//! ~/.local/share/timecap/
//! ├── activities.json
//! └── last_reset
//! ```
//!
//! `activities.json` holds the serialized activity records; `last_reset`
//! holds a single `YYYY-MM-DD` line naming the last day usage was zeroed.
//!
//! ## Data Format
//!
//! ```json
//! [
//!   {
//!     "id": "3f2b8c1e9d4a4f6b8e1c5a7d2f0b9c3e",
//!     "name": "Reading",
//!     "limit": 30,
//!     "used": 10
//!   }
//! ]
//! ```
//!
//! A missing or unparsable records file is treated as an empty collection,
//! never as a fatal error. Write failures (e.g. a full disk) are fatal and
//! surfaced to the caller.

mod store;

pub use store::{ActivityStore, FileStore, MemoryStore};
