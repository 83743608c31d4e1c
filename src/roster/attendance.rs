//! Attendance tracking: per-date status snapshots keyed by student id.

use crate::domain::StudentId;
use crate::roster::store::Roster;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

/// A student's attendance status on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// The opposite status, for mark-toggling surfaces.
    pub fn toggled(self) -> Self {
        match self {
            Self::Present => Self::Absent,
            Self::Absent => Self::Present,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "Present"),
            Self::Absent => write!(f, "Absent"),
        }
    }
}

/// One date's status-per-student snapshot.
pub type AttendanceRecord = BTreeMap<StudentId, AttendanceStatus>;

/// Attendance records for all dates.
///
/// A date's record is created or overwritten wholesale by [`save`]; it is
/// never partially merged.
///
/// [`save`]: AttendanceLog::save
#[derive(Debug, Default)]
pub struct AttendanceLog {
    records: BTreeMap<NaiveDate, AttendanceRecord>,
}

impl AttendanceLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the record for `date` wholesale.
    pub fn save(&mut self, date: NaiveDate, statuses: AttendanceRecord) {
        info!("Saved attendance for {}", date);
        self.records.insert(date, statuses);
    }

    /// Load the statuses for `date` across the current roster.
    ///
    /// Every current roster member absent from the stored record reads as
    /// `Absent` — including every member on a date that was never saved.
    /// Stored entries for students no longer in the roster are omitted.
    pub fn load(&self, date: NaiveDate, roster: &Roster) -> AttendanceRecord {
        let stored = self.records.get(&date);
        roster
            .iter()
            .map(|student| {
                let status = stored
                    .and_then(|record| record.get(&student.id()).copied())
                    .unwrap_or(AttendanceStatus::Absent);
                (student.id(), status)
            })
            .collect()
    }

    /// The raw stored record for `date`, with no synthesis.
    pub fn record(&self, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.records.get(&date)
    }

    /// Iterate saved records in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &AttendanceRecord)> {
        self.records.iter().map(|(date, record)| (*date, record))
    }

    /// Number of saved dates.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any date has been saved.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewStudent;

    fn roster_of(names: &[&str]) -> Roster {
        let mut roster = Roster::new();
        for name in names {
            roster
                .add_student(NewStudent {
                    name: name.to_string(),
                    age: 16,
                    grade: "Grade 10".to_string(),
                    contact: None,
                })
                .unwrap();
        }
        roster
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let roster = roster_of(&["John Doe", "Jane Smith"]);
        let mut log = AttendanceLog::new();

        let mut statuses = AttendanceRecord::new();
        statuses.insert(StudentId::new(1).unwrap(), AttendanceStatus::Present);
        statuses.insert(StudentId::new(2).unwrap(), AttendanceStatus::Absent);
        log.save(date("2024-09-02"), statuses.clone());

        let loaded = log.load(date("2024-09-02"), &roster);
        assert_eq!(loaded, statuses);
    }

    #[test]
    fn test_unsaved_date_reads_all_absent() {
        let roster = roster_of(&["John Doe", "Jane Smith"]);
        let log = AttendanceLog::new();

        let loaded = log.load(date("2024-09-02"), &roster);
        assert_eq!(loaded.len(), 2);
        assert!(loaded.values().all(|s| *s == AttendanceStatus::Absent));
    }

    #[test]
    fn test_load_synthesizes_absent_for_unlisted_student() {
        let mut roster = roster_of(&["John Doe"]);
        let mut log = AttendanceLog::new();

        let mut statuses = AttendanceRecord::new();
        statuses.insert(StudentId::new(1).unwrap(), AttendanceStatus::Present);
        log.save(date("2024-09-02"), statuses);

        // A student admitted after the save reads as Absent on that date
        roster
            .add_student(NewStudent {
                name: "Jane Smith".to_string(),
                age: 17,
                grade: "Grade 11".to_string(),
                contact: None,
            })
            .unwrap();

        let loaded = log.load(date("2024-09-02"), &roster);
        assert_eq!(
            loaded[&StudentId::new(1).unwrap()],
            AttendanceStatus::Present
        );
        assert_eq!(
            loaded[&StudentId::new(2).unwrap()],
            AttendanceStatus::Absent
        );
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let roster = roster_of(&["John Doe", "Jane Smith"]);
        let mut log = AttendanceLog::new();
        let day = date("2024-09-02");

        let mut first = AttendanceRecord::new();
        first.insert(StudentId::new(1).unwrap(), AttendanceStatus::Present);
        first.insert(StudentId::new(2).unwrap(), AttendanceStatus::Present);
        log.save(day, first);

        // Second save lists only one student; the other's entry is gone,
        // so the load synthesizes Absent for it
        let mut second = AttendanceRecord::new();
        second.insert(StudentId::new(2).unwrap(), AttendanceStatus::Present);
        log.save(day, second);

        assert_eq!(log.record(day).unwrap().len(), 1);
        let loaded = log.load(day, &roster);
        assert_eq!(
            loaded[&StudentId::new(1).unwrap()],
            AttendanceStatus::Absent
        );
        assert_eq!(
            loaded[&StudentId::new(2).unwrap()],
            AttendanceStatus::Present
        );
    }

    #[test]
    fn test_status_toggled() {
        assert_eq!(
            AttendanceStatus::Present.toggled(),
            AttendanceStatus::Absent
        );
        assert_eq!(
            AttendanceStatus::Absent.toggled(),
            AttendanceStatus::Present
        );
    }

    #[test]
    fn test_status_serializes_as_convention_strings() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"Present\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Absent).unwrap(),
            "\"Absent\""
        );
    }
}
