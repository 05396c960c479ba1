//! # Activity Storage
//!
//! Implements the storage backends behind the [`ActivityStore`] trait: a
//! file-backed store using XDG-compliant paths and an in-memory store for
//! tests and embedding.

use crate::ledger::Activity;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for the serialized activity records.
const ACTIVITIES_FILE: &str = "activities.json";

/// File name for the last-reset date marker.
const LAST_RESET_FILE: &str = "last_reset";

/// Durable mapping between the ledger's record set / reset marker and a
/// storage medium.
///
/// Loads are lenient: absent or corrupt data reads back as "no data".
/// Saves are strict: a rejected write is an error, since no further
/// operation can proceed without durability.
pub trait ActivityStore {
    /// Load all activity records. Returns an empty vec if nothing has been
    /// stored yet or the stored content cannot be parsed.
    fn load_activities(&self) -> Result<Vec<Activity>>;

    /// Serialize and write the full record set, replacing prior content.
    fn save_activities(&self, activities: &[Activity]) -> Result<()>;

    /// Load the date of the last daily reset, if one was ever recorded.
    fn load_last_reset(&self) -> Result<Option<NaiveDate>>;

    /// Record the date of the last daily reset.
    fn save_last_reset(&self, date: NaiveDate) -> Result<()>;
}

/// File-backed store keeping two files under a data directory.
#[derive(Debug)]
pub struct FileStore {
    /// Directory holding `activities.json` and `last_reset`.
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the platform data directory
    /// (e.g. `~/.local/share/timecap` on Linux).
    pub fn new() -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("", "", "timecap")
            .context("Failed to determine application data directory")?;
        Ok(Self::at(proj_dirs.data_dir().to_path_buf()))
    }

    /// Create a store rooted at an explicit directory. Used by the
    /// `--data-dir` CLI override and by tests.
    pub fn at(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// The directory this store reads from and writes to.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn activities_path(&self) -> PathBuf {
        self.data_dir.join(ACTIVITIES_FILE)
    }

    fn last_reset_path(&self) -> PathBuf {
        self.data_dir.join(LAST_RESET_FILE)
    }

    /// Ensure the data directory exists before a write.
    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                self.data_dir.display()
            )
        })
    }
}

impl ActivityStore for FileStore {
    fn load_activities(&self) -> Result<Vec<Activity>> {
        let path = self.activities_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read activities file: {}", path.display()))?;
        // Corrupt content counts as no data, not a fatal error.
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save_activities(&self, activities: &[Activity]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.activities_path();
        let json = serde_json::to_string_pretty(activities)
            .context("Failed to serialize activities")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write activities file: {}", path.display()))?;
        Ok(())
    }

    fn load_last_reset(&self) -> Result<Option<NaiveDate>> {
        let path = self.last_reset_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read last-reset file: {}", path.display()))?;
        Ok(NaiveDate::parse_from_str(content.trim(), "%Y-%m-%d").ok())
    }

    fn save_last_reset(&self, date: NaiveDate) -> Result<()> {
        self.ensure_dir()?;
        let path = self.last_reset_path();
        fs::write(&path, format!("{}\n", date.format("%Y-%m-%d")))
            .with_context(|| format!("Failed to write last-reset file: {}", path.display()))?;
        Ok(())
    }
}

/// In-memory store, a drop-in fake for [`FileStore`].
///
/// `RefCell` gives the `&self` save methods interior mutability; the trait
/// is single-threaded by design.
#[derive(Debug, Default)]
pub struct MemoryStore {
    activities: RefCell<Vec<Activity>>,
    last_reset: RefCell<Option<NaiveDate>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActivityStore for MemoryStore {
    fn load_activities(&self) -> Result<Vec<Activity>> {
        Ok(self.activities.borrow().clone())
    }

    fn save_activities(&self, activities: &[Activity]) -> Result<()> {
        *self.activities.borrow_mut() = activities.to_vec();
        Ok(())
    }

    fn load_last_reset(&self) -> Result<Option<NaiveDate>> {
        Ok(*self.last_reset.borrow())
    }

    fn save_last_reset(&self, date: NaiveDate) -> Result<()> {
        *self.last_reset.borrow_mut() = Some(date);
        Ok(())
    }
}
