//! The ledger: daily reset plus the record CRUD lifecycle, all through the
//! injected store.

use crate::ledger::Activity;
use crate::storage::ActivityStore;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by ledger operations.
///
/// Validation errors are rejected before any mutation. Operating on a
/// missing id is not an error at all: it is a silent no-op, defensive
/// against stale references held by the presentation layer.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Activity name was empty after trimming.
    #[error("activity name must not be empty")]
    EmptyName,
    /// Daily limit was not a positive number of minutes.
    #[error("daily limit must be a positive number of minutes")]
    InvalidLimit,
    /// Increment amount was not a positive number of minutes.
    #[error("amount must be a positive number of minutes")]
    InvalidAmount,
    /// The storage medium rejected a read or write. Fatal for the operation.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// The activity ledger, generic over its storage backend.
///
/// The store is the sole source of truth: every operation loads the record
/// set, computes the next state, and writes it back. No record cache
/// outlives a single operation.
#[derive(Debug)]
pub struct Ledger<S: ActivityStore> {
    store: S,
}

impl<S: ActivityStore> Ledger<S> {
    /// Create a ledger over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the current record sequence, in insertion order.
    pub fn activities(&self) -> Result<Vec<Activity>, LedgerError> {
        Ok(self.store.load_activities()?)
    }

    /// Zero all usage if `today` differs from the stored reset marker
    /// (including when no marker exists yet), then record `today` as the
    /// marker. Idempotent within the same day.
    pub fn apply_daily_reset(&self, today: NaiveDate) -> Result<(), LedgerError> {
        if self.store.load_last_reset()? == Some(today) {
            return Ok(());
        }

        let mut activities = self.store.load_activities()?;
        for activity in &mut activities {
            activity.used = 0;
        }
        self.store.save_activities(&activities)?;
        self.store.save_last_reset(today)?;
        Ok(())
    }

    /// Append a new activity with a fresh id and zero usage.
    ///
    /// Fails with a validation error, before any mutation, if `name` trims
    /// to empty or `limit` is zero.
    pub fn add_activity(&self, name: &str, limit: u32) -> Result<Activity, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        if limit == 0 {
            return Err(LedgerError::InvalidLimit);
        }

        let activity = Activity::new(name, limit);
        let mut activities = self.store.load_activities()?;
        activities.push(activity.clone());
        self.store.save_activities(&activities)?;
        Ok(activity)
    }

    /// Add `amount` minutes to an activity's usage and return the updated
    /// record.
    ///
    /// Returns `Ok(None)` without touching storage when `id` is unknown.
    /// There is no upper bound: usage may exceed the limit, which only
    /// changes presentation, never blocks the increment. Usage saturates
    /// at `u32::MAX` rather than wrapping.
    pub fn increment_used(&self, id: &str, amount: u32) -> Result<Option<Activity>, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let mut activities = self.store.load_activities()?;
        let Some(activity) = activities.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        activity.used = activity.used.saturating_add(amount);
        let updated = activity.clone();
        self.store.save_activities(&activities)?;
        Ok(Some(updated))
    }

    /// Rename an activity and/or change its daily limit, returning the
    /// updated record.
    ///
    /// A provided `new_name` takes effect only when non-empty after
    /// trimming; a provided `new_limit` only when positive. Lowering the
    /// limit below current usage clamps `used` down to the new limit, so a
    /// record never reads as over-limit purely because its cap shrank.
    /// Returns `Ok(None)` without touching storage when `id` is unknown.
    pub fn edit_activity(
        &self,
        id: &str,
        new_name: Option<&str>,
        new_limit: Option<u32>,
    ) -> Result<Option<Activity>, LedgerError> {
        let mut activities = self.store.load_activities()?;
        let Some(activity) = activities.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        if let Some(name) = new_name {
            let name = name.trim();
            if !name.is_empty() {
                activity.name = name.to_string();
            }
        }
        if let Some(limit) = new_limit {
            if limit > 0 {
                activity.limit = limit;
                if activity.used > limit {
                    activity.used = limit;
                }
            }
        }

        let updated = activity.clone();
        self.store.save_activities(&activities)?;
        Ok(Some(updated))
    }

    /// Remove the activity with the given id, if present.
    ///
    /// An unknown id leaves the record set unchanged; the filtered set is
    /// written back either way.
    pub fn delete_activity(&self, id: &str) -> Result<(), LedgerError> {
        let mut activities = self.store.load_activities()?;
        activities.retain(|a| a.id != id);
        self.store.save_activities(&activities)?;
        Ok(())
    }
}
