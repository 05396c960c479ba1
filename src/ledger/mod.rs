//! # Activity Ledger Module
//!
//! The core bookkeeping logic: activity records with a daily limit, the
//! once-per-day usage reset, and the add / log / edit / remove lifecycle.
//!
//! ## Overview
//!
//! Every mutating operation is a full read-modify-write round trip through
//! the injected [`crate::storage::ActivityStore`]: load the record set,
//! compute the next state, write it back. Nothing is written until the full
//! next state is known, so a storage failure never leaves partial state.
//!
//! Whether an activity is at its limit is derived from `used >= limit` on
//! every read; it is never stored.

mod activity;
mod tracker;

pub use activity::Activity;
pub use tracker::{Ledger, LedgerError};
