//! # Timecap CLI Entry Point
//!
//! A small command-line front-end over the activity ledger.
//!
//! ## Usage
//!
//! ```bash
//! # Show today's activities (also the default with no command)
//! timecap list
//!
//! # Add an activity with a 30 minute daily limit
//! timecap add "Reading" --limit 30
//!
//! # Record 10 minutes spent on it (ids come from `timecap list`;
//! # a unique id prefix is enough)
//! timecap log 3f2b 10
//!
//! # Rename it and lower the limit
//! timecap edit 3f2b --name "Books" --limit 20
//!
//! # Remove it
//! timecap remove 3f2b
//! ```
//!
//! ## Flow
//!
//! Every invocation applies the daily reset first (usage is zeroed the
//! first time the tool runs on a new calendar day), then executes the
//! command, then renders the activity table. Validation errors (blank
//! name, zero limit or amount) exit nonzero before anything is written;
//! unknown ids print a notice but leave state untouched.

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timecap::ledger::{Activity, Ledger};
use timecap::storage::FileStore;

#[derive(Parser, Debug)]
#[command(name = "timecap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track daily time spent on activities against per-activity limits", long_about = None)]
struct Args {
    /// Directory to store activity data in (defaults to the platform data
    /// directory)
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show today's activities
    List,
    /// Add an activity with a daily limit
    Add {
        /// Activity name
        name: String,
        /// Daily limit in minutes
        #[arg(short, long, value_name = "MINUTES")]
        limit: u32,
    },
    /// Record minutes spent on an activity
    Log {
        /// Activity id (or unique prefix) from `timecap list`
        id: String,
        /// Minutes to add
        minutes: u32,
    },
    /// Rename an activity and/or change its daily limit
    Edit {
        /// Activity id (or unique prefix) from `timecap list`
        id: String,
        /// New activity name
        #[arg(short, long)]
        name: Option<String>,
        /// New daily limit in minutes
        #[arg(short, long, value_name = "MINUTES")]
        limit: Option<u32>,
    },
    /// Delete an activity
    Remove {
        /// Activity id (or unique prefix) from `timecap list`
        id: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let store = match args.data_dir {
        Some(dir) => FileStore::at(dir),
        None => FileStore::new()?,
    };
    let ledger = Ledger::new(store);

    // First thing every session: zero usage if the calendar day changed.
    let today = Local::now().date_naive();
    ledger.apply_daily_reset(today)?;

    match args.command.unwrap_or(Command::List) {
        Command::List => {}
        Command::Add { name, limit } => {
            let activity = ledger.add_activity(&name, limit)?;
            println!(
                "Added \"{}\" with a {} min daily limit",
                activity.name, activity.limit
            );
        }
        Command::Log { id, minutes } => match resolve_id(&ledger.activities()?, &id) {
            Some(id) => {
                if let Some(activity) = ledger.increment_used(&id, minutes)? {
                    println!(
                        "Logged {} min on \"{}\" ({} min remaining)",
                        minutes,
                        activity.name,
                        activity.remaining_minutes()
                    );
                }
            }
            None => println!("No activity matches \"{id}\""),
        },
        Command::Edit { id, name, limit } => match resolve_id(&ledger.activities()?, &id) {
            Some(id) => {
                if let Some(activity) = ledger.edit_activity(&id, name.as_deref(), limit)? {
                    println!(
                        "Updated \"{}\" ({} min daily limit)",
                        activity.name, activity.limit
                    );
                }
            }
            None => println!("No activity matches \"{id}\""),
        },
        Command::Remove { id } => match resolve_id(&ledger.activities()?, &id) {
            Some(id) => {
                ledger.delete_activity(&id)?;
                println!("Removed {id}");
            }
            None => println!("No activity matches \"{id}\""),
        },
    }

    render(&ledger.activities()?);
    Ok(())
}

/// Resolve an exact id or a unique id prefix against the current records.
///
/// Ambiguous prefixes resolve to nothing; the caller reports them the same
/// way as unknown ids.
fn resolve_id(activities: &[Activity], given: &str) -> Option<String> {
    if let Some(exact) = activities.iter().find(|a| a.id == given) {
        return Some(exact.id.clone());
    }
    let mut matches = activities.iter().filter(|a| a.id.starts_with(given));
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first.id.clone())
}

/// First eight bytes of an id for display, falling back to the whole id
/// when it is shorter or a hand-edited store put a multi-byte character
/// on the boundary.
fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Render the activity table to stdout.
fn render(activities: &[Activity]) {
    if activities.is_empty() {
        println!("No activities yet. Add one with: timecap add <NAME> --limit <MINUTES>");
        return;
    }

    println!();
    println!(
        "{:<10} {:<24} {:>7} {:>6} {:>6}",
        "ID", "NAME", "LIMIT", "USED", "LEFT"
    );
    for activity in activities {
        let marker = if activity.is_limit_reached() {
            "  at limit"
        } else {
            ""
        };
        println!(
            "{:<10} {:<24} {:>7} {:>6} {:>6}{}",
            short_id(&activity.id),
            activity.name,
            activity.limit,
            activity.used,
            activity.remaining_minutes(),
            marker
        );
    }
}
