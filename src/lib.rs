//! Timecap - a small ledger for daily activity time limits
//!
//! This library provides the core functionality for keeping a ledger of
//! activities, each with a daily limit in minutes, incrementing the minutes
//! used today, and zeroing usage once per calendar day.
//!
//! Storage is an injected dependency (the [`storage::ActivityStore`] trait),
//! so the ledger runs against JSON files in production and an in-memory
//! store in tests.

pub mod ledger;
pub mod storage;
