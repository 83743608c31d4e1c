//! Recent-activity feed: timestamped one-line event descriptions.

use crate::domain::StudentId;
use chrono::{DateTime, Local, NaiveDate};
use std::collections::VecDeque;
use std::fmt;
use tracing::info;

/// A roster event worth surfacing to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    StudentAdded { id: StudentId, name: String },
    StudentUpdated { id: StudentId, name: String },
    StudentDeleted { id: StudentId, name: String },
    DataExported { path: String },
    DataImported { path: String },
    AttendanceSaved { date: NaiveDate },
}

impl fmt::Display for ActivityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StudentAdded { id, name } => {
                write!(f, "Added new student: {} with ID: {}", name, id)
            }
            Self::StudentUpdated { id, name } => {
                write!(f, "Updated student: {} with ID: {}", name, id)
            }
            Self::StudentDeleted { id, name } => {
                write!(f, "Deleted student: {} with ID: {}", name, id)
            }
            Self::DataExported { path } => write!(f, "Exported student data to {}", path),
            Self::DataImported { path } => write!(f, "Imported student data from {}", path),
            Self::AttendanceSaved { date } => write!(f, "Saved attendance for {}", date),
        }
    }
}

/// One recorded activity with its timestamp.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Local>,
    pub event: ActivityEvent,
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.event
        )
    }
}

/// Bounded in-memory feed of recent activities, oldest first.
///
/// Recording an event also emits it through `tracing`, so the feed and
/// the log file stay in step.
#[derive(Debug)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    /// Create a feed retaining at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an event, evicting the oldest entry once full.
    pub fn record(&mut self, event: ActivityEvent) {
        info!("{}", event);
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ActivityEntry {
            timestamp: Local::now(),
            event,
        });
    }

    /// Iterate recorded entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
