//! The activity record: a tracked pursuit with a daily time budget.

use serde::{Deserialize, Serialize};

/// A user-tracked activity with a daily limit in minutes.
///
/// `used` counts minutes consumed today; it is zeroed by the daily reset and
/// may exceed `limit`, which is advisory and never blocks an increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique opaque identifier, stable for the lifetime of the record.
    pub id: String,
    /// Display name, non-empty.
    pub name: String,
    /// Daily budget in minutes, positive.
    pub limit: u32,
    /// Minutes consumed today against the limit.
    pub used: u32,
}

impl Activity {
    /// Create a fresh record with a newly generated id and zero usage.
    pub fn new(name: &str, limit: u32) -> Self {
        Self {
            id: generate_id(),
            name: name.to_string(),
            limit,
            used: 0,
        }
    }

    /// Minutes left in today's budget, floored at zero.
    pub fn remaining_minutes(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }

    /// Whether today's usage has met or exceeded the daily limit.
    pub fn is_limit_reached(&self) -> bool {
        self.used >= self.limit
    }
}

/// Generate a unique opaque id for a new record.
fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_activity_starts_unused() {
        let activity = Activity::new("Reading", 30);
        assert_eq!(activity.name, "Reading");
        assert_eq!(activity.limit, 30);
        assert_eq!(activity.used, 0);
        assert!(!activity.id.is_empty());
    }

    #[test]
    fn test_new_activities_get_distinct_ids() {
        let a = Activity::new("Reading", 30);
        let b = Activity::new("Reading", 30);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_remaining_minutes() {
        let mut activity = Activity::new("Reading", 30);
        assert_eq!(activity.remaining_minutes(), 30);

        activity.used = 10;
        assert_eq!(activity.remaining_minutes(), 20);

        // Overuse floors at zero rather than going negative.
        activity.used = 45;
        assert_eq!(activity.remaining_minutes(), 0);
    }

    #[test]
    fn test_is_limit_reached() {
        let mut activity = Activity::new("Reading", 30);
        assert!(!activity.is_limit_reached());

        activity.used = 29;
        assert!(!activity.is_limit_reached());

        activity.used = 30;
        assert!(activity.is_limit_reached());

        activity.used = 31;
        assert!(activity.is_limit_reached());
    }

    #[test]
    fn test_serialized_field_names() {
        let mut activity = Activity::new("Reading", 30);
        activity.id = "abc123".to_string();
        activity.used = 5;

        let json = serde_json::to_string(&activity).expect("serialize");
        assert_eq!(
            json,
            r#"{"id":"abc123","name":"Reading","limit":30,"used":5}"#
        );

        let parsed: Activity = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, activity);
    }
}
